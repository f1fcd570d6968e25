use super::{Club, ClubCategory, Event, University};

pub const UNIVERSITIES: &[University] = &[
    University { code: "DU", name: "University of Dhaka", city: "Dhaka" },
    University { code: "BUET", name: "Bangladesh University of Engineering and Technology", city: "Dhaka" },
    University { code: "NSU", name: "North South University", city: "Dhaka" },
    University { code: "BRACU", name: "BRAC University", city: "Dhaka" },
    University { code: "CU", name: "University of Chittagong", city: "Chattogram" },
    University { code: "SUST", name: "Shahjalal University of Science and Technology", city: "Sylhet" },
    University { code: "RU", name: "University of Rajshahi", city: "Rajshahi" },
];

pub const CLUBS: &[Club] = &[
    Club {
        id: "du-debating-society",
        name: "Dhaka University Debating Society",
        short_name: "DUDS",
        university: "DU",
        category: ClubCategory::Debate,
        description: "Parliamentary and Asian-format debating with weekly motions, national tournaments, and a public speaking workshop for first-years.",
        founded: 1983,
        members: 240,
        followers: 3120,
        tags: &["debate", "public speaking", "tournaments"],
        contact_email: "duds@du.ac.bd",
        meeting_place: "TSC Seminar Room, Thursdays 4 PM",
    },
    Club {
        id: "buet-robotics-society",
        name: "BUET Robotics Society",
        short_name: "BRS",
        university: "BUET",
        category: ClubCategory::Technology,
        description: "Builds line followers, rovers, and drones; fields teams for the University Rover Challenge and runs an embedded systems bootcamp.",
        founded: 2009,
        members: 185,
        followers: 4410,
        tags: &["robotics", "embedded", "competitions"],
        contact_email: "robotics@buet.ac.bd",
        meeting_place: "ECE Building Lab 3, Saturdays 10 AM",
    },
    Club {
        id: "nsu-business-club",
        name: "NSU Business Club",
        short_name: "NSUBC",
        university: "NSU",
        category: ClubCategory::Business,
        description: "Case competitions, startup pitch nights, and a mentorship program with alumni working across Dhaka's corporate sector.",
        founded: 2001,
        members: 320,
        followers: 5230,
        tags: &["business", "case competition", "startups"],
        contact_email: "nsubc@northsouth.edu",
        meeting_place: "NAC 6th Floor Lounge, Mondays 3 PM",
    },
    Club {
        id: "bracu-cultural-club",
        name: "BRAC University Cultural Club",
        short_name: "BUCC",
        university: "BRACU",
        category: ClubCategory::Cultural,
        description: "Music, dance, and theatre wings that stage Pohela Boishakh and the annual spring showcase.",
        founded: 2004,
        members: 410,
        followers: 6020,
        tags: &["music", "dance", "theatre"],
        contact_email: "bucc@bracu.ac.bd",
        meeting_place: "Multipurpose Hall, Wednesdays 5 PM",
    },
    Club {
        id: "sust-cse-society",
        name: "SUST CSE Society",
        short_name: "SCS",
        university: "SUST",
        category: ClubCategory::Technology,
        description: "Competitive programming training, ICPC team selection, and an open-source hack week every winter.",
        founded: 2003,
        members: 260,
        followers: 2890,
        tags: &["programming", "icpc", "open source"],
        contact_email: "cse.society@sust.edu",
        meeting_place: "IICT Building Room 210, Sundays 6 PM",
    },
    Club {
        id: "cu-volunteers-circle",
        name: "CU Volunteers' Circle",
        short_name: "CUVC",
        university: "CU",
        category: ClubCategory::Volunteering,
        description: "Blood donation drives, winter clothing campaigns, and flood relief logistics across Chattogram division.",
        founded: 2012,
        members: 530,
        followers: 3780,
        tags: &["volunteering", "blood donation", "relief"],
        contact_email: "volunteers@cu.ac.bd",
        meeting_place: "Central Field Pavilion, Fridays 3 PM",
    },
    Club {
        id: "ru-cricket-club",
        name: "RU Cricket Club",
        short_name: "RUCC",
        university: "RU",
        category: ClubCategory::Sports,
        description: "Inter-department leagues, net sessions with certified coaches, and the annual inter-university T20 cup.",
        founded: 1995,
        members: 150,
        followers: 2210,
        tags: &["cricket", "sports", "tournaments"],
        contact_email: "cricket@ru.ac.bd",
        meeting_place: "RU Stadium Nets, daily 6 AM",
    },
    Club {
        id: "buet-astronomy-society",
        name: "BUET Astronomy Society",
        short_name: "BAS",
        university: "BUET",
        category: ClubCategory::Science,
        description: "Night-sky observation camps, telescope workshops, and the national astronomy olympiad preparation circle.",
        founded: 2015,
        members: 95,
        followers: 1870,
        tags: &["astronomy", "observation", "olympiad"],
        contact_email: "astronomy@buet.ac.bd",
        meeting_place: "Civil Building Rooftop, alternate Fridays 8 PM",
    },
];

pub const EVENTS: &[Event] = &[
    Event {
        id: "duds-spring-open-2026",
        club_id: "du-debating-society",
        title: "DUDS Spring Open 2026",
        description: "Two-day British Parliamentary tournament with novice and open breaks.",
        venue: "Nabab Nawab Ali Chowdhury Senate Bhaban",
        starts_at: 1_773_478_800_000,
        ends_at: 1_773_489_600_000,
        capacity: 180,
        upvotes: 412,
        tags: &["debate", "tournament"],
    },
    Event {
        id: "bucc-monsoon-showcase",
        club_id: "bracu-cultural-club",
        title: "Monsoon Showcase",
        description: "An evening of Rabindra Sangeet, contemporary dance, and a short Bangla play.",
        venue: "BRAC University Auditorium",
        starts_at: 1_787_371_200_000,
        ends_at: 1_787_396_400_000,
        capacity: 600,
        upvotes: 958,
        tags: &["music", "dance", "theatre"],
    },
    Event {
        id: "cuvc-blood-drive-sept",
        club_id: "cu-volunteers-circle",
        title: "September Blood Donation Drive",
        description: "Walk-in blood donation camp with Sandhani Chattogram; free health check for every donor.",
        venue: "CU Medical Centre",
        starts_at: 1_789_725_600_000,
        ends_at: 1_789_738_200_000,
        capacity: 250,
        upvotes: 301,
        tags: &["volunteering", "health"],
    },
    Event {
        id: "brs-rover-demo-day",
        club_id: "buet-robotics-society",
        title: "Rover Demo Day",
        description: "Field demonstrations of this year's Mars rover prototype, followed by recruitment talks.",
        venue: "BUET Central Playground",
        starts_at: 1_793_331_000_000,
        ends_at: 1_793_444_400_000,
        capacity: 400,
        upvotes: 733,
        tags: &["robotics", "demo", "recruitment"],
    },
    Event {
        id: "nsubc-pitch-night",
        club_id: "nsu-business-club",
        title: "Startup Pitch Night",
        description: "Ten student teams pitch to a panel of angel investors; audience vote decides the wildcard.",
        venue: "NSU Syndicate Hall",
        starts_at: 1_794_470_400_000,
        ends_at: 1_794_492_000_000,
        capacity: 300,
        upvotes: 640,
        tags: &["startups", "pitch"],
    },
    Event {
        id: "scs-hack-week",
        club_id: "sust-cse-society",
        title: "Winter Open-Source Hack Week",
        description: "A day of guided first contributions to Bangla NLP and civic-tech projects.",
        venue: "SUST IICT Building",
        starts_at: 1_795_226_400_000,
        ends_at: 1_795_255_200_000,
        capacity: 150,
        upvotes: 287,
        tags: &["programming", "open source"],
    },
    Event {
        id: "bas-geminids-camp",
        club_id: "buet-astronomy-society",
        title: "Geminids Observation Camp",
        description: "Overnight meteor-shower watch with telescopes and an astrophotography primer.",
        venue: "BUET Civil Building Rooftop",
        starts_at: 1_796_475_600_000,
        ends_at: 1_796_490_000_000,
        capacity: 60,
        upvotes: 190,
        tags: &["astronomy", "observation"],
    },
    Event {
        id: "rucc-inter-university-t20",
        club_id: "ru-cricket-club",
        title: "Inter-University T20 Cup",
        description: "Eight universities, two days, one trophy. Spectators welcome.",
        venue: "Rajshahi University Stadium",
        starts_at: 1_799_467_200_000,
        ends_at: 1_799_582_400_000,
        capacity: 2000,
        upvotes: 845,
        tags: &["cricket", "tournament"],
    },
    Event {
        id: "duds-language-day-debate",
        club_id: "du-debating-society",
        title: "Ekushey Bangla Debate",
        description: "A Bangla-medium showcase debate on International Mother Language Day.",
        venue: "TSC Auditorium",
        starts_at: 1_803_171_600_000,
        ends_at: 1_803_189_600_000,
        capacity: 350,
        upvotes: 522,
        tags: &["debate", "bangla"],
    },
];
