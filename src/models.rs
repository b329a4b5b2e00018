use serde::{Deserialize, Serialize};

use crate::typewriter::{Typewriter, TypewriterConfig, TypewriterError};

/// 页面分区（按页面顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Education,
        Section::Contact,
    ];

    /// 导航栏中的名称
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// 分区标题
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "",
            Section::About => "About Me",
            Section::Skills => "My Skills",
            Section::Experience => "Work Experience",
            Section::Projects => "My Projects",
            Section::Education => "Education",
            Section::Contact => "Contact Info",
        }
    }
}

/// 个人资料（TOML 文件结构）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub roles: Vec<String>,
    pub about: Vec<String>,
    pub facts: Vec<Fact>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub socials: Vec<Social>,
    pub contact: Contact,
    pub typewriter: TypewriterSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8, // 0..=100
}

impl Skill {
    pub fn percent(&self) -> u8 {
        self.level.min(100)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Social {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub location: String,
    pub phone: String,
    pub email: String,
}

/// 打字机时间参数（毫秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterSettings {
    pub hold_delay_ms: u64,
    pub type_speed_ms: u64,
    pub delete_ratio: u32,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        let config = TypewriterConfig::default();
        Self {
            hold_delay_ms: config.hold_delay.as_millis() as u64,
            type_speed_ms: config.type_speed.as_millis() as u64,
            delete_ratio: config.delete_ratio,
        }
    }
}

impl From<TypewriterSettings> for TypewriterConfig {
    fn from(s: TypewriterSettings) -> Self {
        TypewriterConfig::from_millis(s.hold_delay_ms, s.type_speed_ms, s.delete_ratio)
    }
}

impl Profile {
    /// 用 roles 构建打字机引擎
    pub fn typewriter(&self) -> Result<Typewriter, TypewriterError> {
        Typewriter::new(self.roles.iter().cloned(), self.typewriter.into())
    }

    pub fn is_empty_section(&self, section: Section) -> bool {
        match section {
            Section::Home | Section::Contact => false,
            Section::About => self.about.is_empty() && self.facts.is_empty(),
            Section::Skills => self.skills.is_empty(),
            Section::Experience => self.experiences.is_empty(),
            Section::Projects => self.projects.is_empty(),
            Section::Education => self.education.is_empty(),
        }
    }
}

fn fact(label: &str, value: &str) -> Fact {
    Fact {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

/// 内置示例资料
impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Alex Carter".to_string(),
            tagline: "A passionate frontend developer specializing in creating responsive and user-friendly web applications.".to_string(),
            roles: vec![
                " Frontend Developer".to_string(),
                " React Specialist".to_string(),
                " Problem Solver".to_string(),
            ],
            about: vec![
                "I'm a Frontend Developer with a passion for turning ideas into interactive, user-friendly web experiences. I specialize in building responsive, scalable UIs and I'm experienced in integrating real-time APIs and managing application state.".to_string(),
                "From dynamic single-page apps to elegant landing pages, I enjoy building projects that are both functional and visually refined. Great user experiences are built with attention to detail, performance, and responsiveness across devices.".to_string(),
            ],
            facts: vec![
                fact("Name", "Alex Carter"),
                fact("Email", "alex@example.com"),
                fact("Location", "Mumbai, India"),
                fact("Availability", "Frontend Developer"),
            ],
            skills: vec![
                skill("React.js", 90),
                skill("JavaScript", 85),
                skill("TypeScript", 80),
                skill("Tailwind CSS", 80),
                skill("HTML/CSS", 95),
                skill("Next.js", 70),
                skill("Redux", 75),
                skill("Node.js", 70),
                skill("Git", 85),
                skill("Framer Motion", 80),
                skill("RESTful APIs", 85),
            ],
            experiences: vec![Experience {
                title: "Web Developer".to_string(),
                company: "Example Solutions Pvt Ltd".to_string(),
                location: "Pune".to_string(),
                period: "Feb 2024 - July 2024".to_string(),
                description: "Worked on a custom CRM portal for a large FMCG enterprise supporting hundreds of salespersons and thousands of retailers. Built responsive, scalable interfaces with React, TypeScript and Tailwind CSS, integrated RESTful APIs, and created reusable components and dynamic form logic within Agile sprints.".to_string(),
            }],
            projects: vec![
                Project {
                    title: "Landing Page".to_string(),
                    description: "A fully responsive landing page with clean UI, smooth animations and mobile-first design, focused on semantic structure and performance.".to_string(),
                    tags: vec!["Next.js".to_string(), "Tailwind CSS".to_string(), "Framer Motion".to_string()],
                    live_link: Some("https://example.com/landing".to_string()),
                    source_link: Some("https://example.com/landing.git".to_string()),
                },
                Project {
                    title: "MovieFlix".to_string(),
                    description: "A responsive movie browser with real-time search, cast details and multi-page navigation.".to_string(),
                    tags: vec!["React.js".to_string(), "React Router Dom".to_string(), "Tailwind CSS".to_string()],
                    live_link: Some("https://example.com/movieflix".to_string()),
                    source_link: None,
                },
            ],
            education: vec![
                Education {
                    degree: "Bachelors in Business Administration".to_string(),
                    institution: "Example College".to_string(),
                    location: "Bangalore".to_string(),
                    period: "2020 - 2023".to_string(),
                },
                Education {
                    degree: "HSC - (Science)".to_string(),
                    institution: "Example Junior College".to_string(),
                    location: "Bhiwandi".to_string(),
                    period: "2018 - 2020".to_string(),
                },
            ],
            socials: vec![
                Social {
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                },
                Social {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/example".to_string(),
                },
            ],
            contact: Contact {
                location: "Mumbai, India".to_string(),
                phone: "+91 00000 00000".to_string(),
                email: "alex@example.com".to_string(),
            },
            typewriter: TypewriterSettings::default(),
        }
    }
}
