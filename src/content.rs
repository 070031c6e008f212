//! Static content rendered by the portfolio sections.

use chrono::{DateTime, Datelike, FixedOffset};

pub const OWNER: &str = "Nayan Punamiya";
pub const TAGLINE: &str = "Full Stack Web Developer | Machine Learning Enthusiast";
pub const RESUME_URL: &str = "https://docs.google.com/document/d/1uV_ryzX6iFNzNmzoLJAKX8ryRTguhr2d/edit?usp=drive_link&ouid=104814200948522809032&rtpof=true&sd=true";
pub const SHOWCASE_IMAGES: [(&str, &str); 2] = [
    (
        "https://raw.githubusercontent.com/nayanpunmiya/nayanpunmiya/refs/heads/main/Make%20your%20README.png",
        "First Image",
    ),
    (
        "https://user-images.githubusercontent.com/55389276/140866485-8fb1c876-9a8f-4d6a-98dc-08c4981eaf70.gif",
        "Second Image",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

pub static NAV_LINKS: &[NavLink] = &[
    NavLink { path: "/", label: "Home", icon: "🚀" },
    NavLink { path: "/education", label: "Education", icon: "💡" },
    NavLink { path: "/skills", label: "Skills", icon: "💻" },
    NavLink { path: "/experience", label: "Experience", icon: "💼" },
    NavLink { path: "/projects", label: "Projects", icon: "🚀" },
    NavLink { path: "/blog", label: "Blog", icon: "📰" },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub title: &'static str,
    pub details: &'static str,
}

pub static EDUCATION: &[Education] = &[
    Education {
        title: "B. Tech CSE | SRM Institute of Science and Technology, Chennai",
        details: "CGPA: 7.66 | 2022-present",
    },
    Education {
        title: "12th (Karnataka State Board) | Christ Junior College, Bengaluru",
        details: "88%",
    },
    Education {
        title: "10th (ICSE) | The Cathedral High School, Bengaluru",
        details: "87.4%",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        skills: &["Python", "Java", "C", "C++", "JavaScript", "HTML", "CSS"],
    },
    SkillCategory {
        name: "Big Data Analytics",
        skills: &["Hadoop", "MongoDB", "Apache Spark"],
    },
    SkillCategory {
        name: "Frameworks & Libraries",
        skills: &["MERN Stack", "Angular"],
    },
    SkillCategory {
        name: "Machine Learning",
        skills: &["NLTK", "Hugging Face Transformers", "TensorFlow"],
    },
    SkillCategory {
        name: "Other",
        skills: &["Git", "GitHub", "Data Structures & Algorithms", "OOP"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: &[Role] = &[Role {
    title: "Web Developer Intern",
    company: "Cognizance IIT Roorkee (RHYNO EV)",
    period: "June 2024 – August 2024",
    highlights: &[
        "Developed and maintained web applications using React.js and Node.js",
        "Collaborated with cross-functional teams to design and implement new features",
        "Optimized website performance and improved user experience",
        "Participated in code reviews and contributed to best practices",
    ],
}];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
}

pub static PROJECTS: &[Project] = &[
    Project {
        title: "AI Chatbot Cryptocurrency Swapper",
        description: "Developed a cryptocurrency swapping platform using Blockchain technology for secure transactions. Integrated real-time price updates.",
        technologies: &["Python", "NLTK", "Hugging Face Transformers"],
    },
    Project {
        title: "Contact List Management App",
        description: "Built a contact management system using MEAN Stack, allowing users to add, edit, delete, and search contacts. Increased mobile engagement through responsive design improvements.",
        technologies: &["MongoDB", "Express.js", "Angular", "Node.js"],
    },
    Project {
        title: "Python Sentiment Analysis",
        description: "Created a sentiment analysis tool using NLTK and Hugging Face Transformers to classify Amazon reviews. Improved model accuracy by 15% through data preprocessing and fine-tuning.",
        technologies: &["Python", "NLTK", "Hugging Face Transformers"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub href: &'static str,
    pub label: &'static str,
    pub icon_class: &'static str,
    pub hover_class: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        href: "https://github.com/nayanpunmiya",
        label: "GitHub Profile",
        icon_class: "devicon-github-plain",
        hover_class: "hover:text-gray-400",
    },
    SocialLink {
        href: "https://www.linkedin.com/in/nayanpunamiya",
        label: "LinkedIn Profile",
        icon_class: "devicon-linkedin-plain",
        hover_class: "hover:text-blue-400",
    },
    SocialLink {
        href: "https://mail.google.com/mail/?view=cm&fs=1&to=punmiyanayan@gmail.com&su=Portfolio%20Contact",
        label: "Email",
        icon_class: "extra-email",
        hover_class: "hover:text-yellow-300",
    },
];

fn build_time() -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME")).ok()
}

/// Year of the build, falling back to the year the site launched.
pub fn copyright_year() -> i32 {
    build_time().map(|dt| dt.year()).unwrap_or(2024)
}

pub fn build_date() -> Option<String> {
    build_time().map(|dt| dt.format("%b %e, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nav_paths_unique() {
        let paths: HashSet<_> = NAV_LINKS.iter().map(|l| l.path).collect();
        assert_eq!(paths.len(), NAV_LINKS.len());
        assert!(paths.contains("/blog"));
        assert_eq!(NAV_LINKS[0].path, "/");
    }

    #[test]
    fn test_sections_populated() {
        assert_eq!(EDUCATION.len(), 3);
        assert_eq!(SKILL_CATEGORIES.len(), 5);
        assert!(SKILL_CATEGORIES.iter().all(|c| !c.skills.is_empty()));
        assert_eq!(EXPERIENCE[0].highlights.len(), 4);
        assert_eq!(PROJECTS.len(), 3);
        assert!(PROJECTS.iter().all(|p| !p.technologies.is_empty()));
    }

    #[test]
    fn test_build_stamp() {
        assert!(copyright_year() >= 2024);
        let date = build_date().expect("build.rs stamps an rfc3339 time");
        assert!(date.ends_with(&copyright_year().to_string()));
    }
}
