/// The site owner's biographical facts, referenced across the view tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub education: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
    pub portrait: &'static str,
    pub resume_url: &'static str,
    pub intro: &'static str,
    pub about: &'static [&'static str],
}

static PROFILE: Profile = Profile {
    name: "Azhar Ali Shah",
    role: "BS Software Engineering Student — UET Mardan",
    tagline: "Software Engineer • UI/UX • Cybersecurity",
    education: "BS Software Engineering — UET Mardan",
    location: "Mardan, Pakistan",
    email: "azharalishah405@gmail.com",
    phone: "+92-3307292838",
    linkedin_url: "https://www.linkedin.com/in/azhar-ali-shah-72a4571b8/",
    github_url: "https://github.com/Azhar-max",
    portrait: "/assets/profile.png",
    resume_url: "/assets/resume/Azhar_Ali_Shah_Resume.pdf",
    intro: "I'm a multi-discipline Software Engineer & Designer. I build user-friendly, secure, and beautiful web & mobile products. I also work with social media strategies, blockchain ideas, and cybersecurity practices.",
    about: &[
        "I'm Azhar — a BS Software Engineering student at UET Mardan. I love designing clean interfaces, building robust web & mobile apps, and researching secure systems. I enjoy solving problems using modern technologies like React, blockchain primitives, and mobile frameworks.",
        "Open to internships, collaborative projects, and freelance assignments.",
    ],
};

pub fn profile() -> &'static Profile {
    &PROFILE
}
