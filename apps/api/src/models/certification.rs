/// A certification or course in the static recommendation library.
#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub provider: &'static str,
    pub level: &'static str,
    pub skills: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub link: &'static str,
}

pub const CERT_LIBRARY: &[Certification] = &[
    Certification {
        name: "Google Data Analytics Professional Certificate",
        provider: "Coursera",
        level: "Beginner–Intermediate",
        skills: &["SQL", "Data Visualization", "Spreadsheets"],
        tags: &["data", "analytics"],
        link: "",
    },
    Certification {
        name: "IBM Data Science Professional Certificate",
        provider: "Coursera",
        level: "Intermediate",
        skills: &["Python", "Machine Learning", "Data Analysis"],
        tags: &["data", "software"],
        link: "",
    },
    Certification {
        name: "Microsoft Azure Fundamentals (AZ-900)",
        provider: "Microsoft",
        level: "Beginner",
        skills: &["Cloud", "Networking", "Security Basics"],
        tags: &["it", "security", "software"],
        link: "",
    },
    Certification {
        name: "CompTIA Security+",
        provider: "CompTIA",
        level: "Intermediate",
        skills: &["Security Basics", "Networking", "Incident Response"],
        tags: &["security"],
        link: "",
    },
    Certification {
        name: "AWS Certified Cloud Practitioner",
        provider: "AWS",
        level: "Beginner",
        skills: &["Cloud", "Networking", "Security Basics"],
        tags: &["it", "software"],
        link: "",
    },
    Certification {
        name: "Google Project Management Professional Certificate",
        provider: "Coursera",
        level: "Beginner–Intermediate",
        skills: &["Project Management", "Communication", "Teamwork"],
        tags: &["business", "software", "healthcare", "science"],
        link: "",
    },
];
