/// A single skill entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Presentational grouping of skills; category names are unique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Development",
        skills: &[
            Skill {
                title: "Software Engineer",
                description: "Full-stack thinking, problem solving",
                icon: "💻",
            },
            Skill {
                title: "React Native App Developer",
                description: "Cross-platform apps",
                icon: "📱",
            },
            Skill {
                title: "Blockchain Developer",
                description: "Smart contracts & dapps",
                icon: "🧱",
            },
        ],
    },
    SkillCategory {
        name: "Design",
        skills: &[
            Skill {
                title: "Web Designer",
                description: "Design systems & responsive layouts",
                icon: "🎨",
            },
            Skill {
                title: "Application Designer",
                description: "Mobile & Desktop app UX",
                icon: "🖥️",
            },
            Skill {
                title: "UI/UX Designer",
                description: "User-centric interfaces",
                icon: "📐",
            },
        ],
    },
    SkillCategory {
        name: "Other",
        skills: &[
            Skill {
                title: "Student",
                description: "BS Software Engineering - UET Mardan",
                icon: "🎓",
            },
            Skill {
                title: "Social Media Marketer",
                description: "Campaigns & growth",
                icon: "📣",
            },
            Skill {
                title: "Social Media Expert",
                description: "Strategy & analytics",
                icon: "📈",
            },
            Skill {
                title: "Cyber Security Expert",
                description: "Security best practices",
                icon: "🛡️",
            },
        ],
    },
];

pub fn skill_categories() -> &'static [SkillCategory] {
    SKILL_CATEGORIES
}
