//! Starter catalog seeded on first boot so recommendations work before an
//! administrator has curated anything.

use tracing::info;

use crate::catalog::repository::{CareerRepository, NewCareerPath};
use crate::errors::AppError;
use crate::models::career::{LearningResource, RequiredEducation};

/// Seeds the starter catalog if the table is empty. Safe to call on every
/// startup.
pub async fn seed_if_empty(careers: &dyn CareerRepository) -> Result<(), AppError> {
    if careers.count().await? > 0 {
        return Ok(());
    }

    info!("Career catalog is empty, seeding starter careers...");
    let starters = starter_careers();
    let total = starters.len();
    for career in starters {
        careers.create(career).await?;
    }
    info!("Seeded {total} starter careers");
    Ok(())
}

fn career(
    title: &str,
    category: &str,
    description: &str,
    demand: &str,
    avg_salary: &str,
    growth_outlook: &str,
    education: (&str, &[&str]),
    skills: &[&str],
    interests: &[&str],
    resources: &[(&str, &str, Option<&str>)],
) -> NewCareerPath {
    NewCareerPath {
        title: title.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        demand: demand.to_string(),
        avg_salary: avg_salary.to_string(),
        growth_outlook: growth_outlook.to_string(),
        required_education: Some(RequiredEducation {
            level: education.0.to_string(),
            fields: education.1.iter().map(|f| f.to_string()).collect(),
        }),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        related_interests: interests.iter().map(|i| i.to_string()).collect(),
        learning_resources: Some(
            resources
                .iter()
                .map(|(t, ty, url)| LearningResource::new(t, ty, *url))
                .collect(),
        ),
    }
}

fn starter_careers() -> Vec<NewCareerPath> {
    vec![
        career(
            "Full Stack Developer",
            "Software Development",
            "Build complete web applications, from user interface to database management.",
            "High",
            "$80k-$150k",
            "+22%",
            ("Bachelor's", &["Computer Science", "Software Engineering"]),
            &["JavaScript", "React", "Node.js", "SQL"],
            &["Web", "Software", "Problem Solving"],
            &[
                ("The Odin Project", "Free Course", Some("https://www.theodinproject.com")),
                ("Full Stack Open", "Free Course", Some("https://fullstackopen.com")),
            ],
        ),
        career(
            "Data Scientist",
            "Data Science",
            "Extract insights from complex data sets using machine learning and statistics.",
            "High",
            "$95k-$165k",
            "+28%",
            ("Bachelor's", &["Computer Science", "Statistics", "Mathematics"]),
            &["Python", "SQL", "Machine Learning", "Statistics"],
            &["Data", "AI", "Research"],
            &[
                ("IBM Data Science Certificate", "Coursera", None),
                ("Kaggle Learn", "Free Platform", Some("https://www.kaggle.com/learn")),
            ],
        ),
        career(
            "DevOps Engineer",
            "Infrastructure",
            "Automate deployment pipelines and keep production systems reliable and scalable.",
            "High",
            "$90k-$160k",
            "+25%",
            ("Bachelor's", &["Computer Science", "Information Technology"]),
            &["Linux", "Docker", "Kubernetes", "AWS", "CI/CD"],
            &["Infrastructure", "Automation", "Cloud"],
            &[("Docker Mastery", "Udemy", None)],
        ),
        career(
            "UX/UI Designer",
            "Design",
            "Design intuitive interfaces through user research, wireframing, and prototyping.",
            "Medium",
            "$70k-$125k",
            "+22%",
            ("Associate", &["Design", "Human-Computer Interaction"]),
            &["Figma", "User Research", "Prototyping", "Wireframing"],
            &["Design", "Creativity", "People"],
            &[("Google UX Design Certificate", "Coursera", None)],
        ),
        career(
            "Product Manager",
            "Management",
            "Lead product vision and strategy across engineering, design, and marketing teams.",
            "High",
            "$95k-$165k",
            "+22%",
            ("Bachelor's", &["Business", "Computer Science"]),
            &["Product Strategy", "Roadmapping", "Data Analysis", "Communication"],
            &["Business", "Strategy", "People"],
            &[("Product Management Fundamentals", "Online Course", None)],
        ),
        career(
            "Machine Learning Engineer",
            "Data Science",
            "Build and deploy machine learning models at production scale.",
            "High",
            "$100k-$175k",
            "+30%",
            ("Master's", &["Computer Science", "Machine Learning", "Mathematics"]),
            &["Python", "Machine Learning", "TensorFlow", "Docker", "SQL"],
            &["AI", "Data", "Research"],
            &[
                (
                    "Andrew Ng ML Course",
                    "Coursera",
                    Some("https://www.coursera.org/learn/machine-learning"),
                ),
            ],
        ),
    ]
}
