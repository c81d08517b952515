//! Enumerations offered by the application forms.
//!
//! Every list here backs a `OneOf` rule in the schema registry, so a value
//! accepted by the forms is always one of these strings.

pub const COUNTRIES: &[&str] = &[
    "Philippines",
    "Australia",
    "Canada",
    "Hong Kong",
    "Japan",
    "Kuwait",
    "Malaysia",
    "Qatar",
    "Saudi Arabia",
    "Singapore",
    "South Korea",
    "Taiwan",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
];

pub const SEXES: &[&str] = &["Male", "Female"];

pub const CIVIL_STATUSES: &[&str] = &["Single", "Married", "Widowed", "Separated", "Live-in"];

pub const EMPLOYMENT_STATUSES: &[&str] = &[
    "Employed",
    "Self-employed",
    "Unemployed",
    "New Entrant/Fresh Graduate",
    "Finished Contract",
    "Resigned",
    "Retired",
    "Terminated/Laid off",
];

pub const WORK_EMPLOYMENT_STATUSES: &[&str] = &[
    "Permanent",
    "Contractual",
    "Part-time",
    "Probationary",
    "Project-based",
    "Seasonal",
];

pub const EDUCATION_LEVELS: &[&str] = &[
    "Elementary",
    "Secondary (Non-K12)",
    "Junior High School",
    "Senior High School",
    "Alternative Learning System",
    "Vocational/Technical",
    "College",
    "Post-Graduate",
];

/// Levels for which a course or strand must be given.
pub const LEVELS_WITH_COURSE: &[&str] = &["Senior High School", "College", "Post-Graduate"];

pub const FIELDS_OF_STUDY: &[&str] = &[
    "Accountancy",
    "Agriculture",
    "Architecture",
    "Business Administration",
    "Computer Science",
    "Criminology",
    "Education",
    "Engineering",
    "Hospitality Management",
    "Information Technology",
    "Law",
    "Medicine",
    "Nursing",
    "Psychology",
    "Tourism",
];

pub const INDUSTRIES: &[&str] = &[
    "Agriculture, Forestry and Fishing",
    "Mining and Quarrying",
    "Manufacturing",
    "Electricity, Gas and Water Supply",
    "Construction",
    "Wholesale and Retail Trade",
    "Hotels and Restaurants",
    "Transport, Storage and Communications",
    "Financial Intermediation",
    "Real Estate, Renting and Business Activities",
    "Information Technology and BPO",
    "Public Administration and Defense",
    "Education",
    "Health and Social Work",
    "Other Community, Social and Personal Services",
];

pub const EMPLOYER_TYPES: &[&str] = &["Public", "Private"];

pub const COMPANY_TYPES: &[&str] = &[
    "Sole Proprietorship",
    "Partnership",
    "Corporation",
    "Cooperative",
    "Government Agency",
    "Non-Government Organization",
];

pub const INSTITUTION_TYPES: &[&str] = &[
    "State University/College",
    "Local University/College",
    "Private Higher Education Institution",
    "Technical-Vocational Institution",
    "Senior High School",
];

pub const WORK_FORCE_SIZES: &[&str] = &[
    "Micro (1-9)",
    "Small (10-99)",
    "Medium (100-199)",
    "Large (200 and up)",
];

pub const LANGUAGES: &[&str] = &[
    "English",
    "Filipino",
    "Ilocano",
    "Cebuano",
    "Hiligaynon",
    "Bicolano",
    "Waray",
    "Kapampangan",
    "Pangasinense",
    "Mandarin",
    "Japanese",
    "Korean",
    "Arabic",
    "Spanish",
];

pub const LICENSE_TYPES: &[&str] = &["Eligibility", "Professional License"];

pub const SKILLS: &[&str] = &[
    "Auto Mechanic",
    "Beautician",
    "Carpentry Work",
    "Computer Literate",
    "Domestic Chores",
    "Driver",
    "Electrician",
    "Embroidery",
    "Gardening",
    "Masonry",
    "Painter/Artist",
    "Painting Jobs",
    "Photography",
    "Plumbing",
    "Sewing Dresses",
    "Stenography",
    "Tailoring",
];
