//! Static site content
//!
//! The copy for the single marketing page. The page renderer pulls it from
//! `GET /v1/site` so wording changes do not need a front-end rebuild.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub name: String,
    pub credential: String,
    pub tagline: String,
    pub experience: String,
    pub portrait: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub heading: String,
    pub image: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpertiseArea {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactSection {
    pub heading: String,
    pub blurb: String,
    pub call_to_action: String,
    /// Path the form posts to
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub hero: Hero,
    pub about: About,
    pub expertise_heading: String,
    pub expertise: Vec<ExpertiseArea>,
    pub contact: ContactSection,
}

impl Default for SiteContent {
    fn default() -> Self {
        let placeholder_image = "/missingTexture.jpg".to_string();

        Self {
            hero: Hero {
                name: "Erin Leigh Monberg".to_string(),
                credential: "CNM".to_string(),
                tagline: "Expert Midwife Witness".to_string(),
                experience: "[Filler] years of midwifery experience".to_string(),
                portrait: "/em.jpg".to_string(),
            },
            about: About {
                heading: "About Me".to_string(),
                image: placeholder_image.clone(),
                paragraphs: vec![
                    "I received my bachelors degree in Philosophy from St. John's College in \
                     Annapolis, MD and a Master of Science degree in Nursing from Vanderbilt \
                     University School of Nursing in 2002. Educating women about their bodies \
                     is an awesome opportunity to create change in the world. When women are \
                     empowered and healthy, they build strong, happy families and communities."
                        .to_string(),
                    "I find joy in helping women achieve safe and satisfying births. I also \
                     enjoy supporting women as they make health care decisions through all \
                     seasons of their life. Midwife means \"with women\" and I feel so \
                     privileged to be with women here in the Midcoast."
                        .to_string(),
                    "My husband and I are thrilled to have moved home to Maine where we are \
                     raising three kids, a dog and as many vegetables as we can."
                        .to_string(),
                ],
            },
            expertise_heading: "Fields of Expertise".to_string(),
            expertise: (1..=3)
                .map(|i| ExpertiseArea {
                    title: format!("Expertise {}", i),
                    description: "[Placeholder text for expertise description]".to_string(),
                    image: placeholder_image.clone(),
                })
                .collect(),
            contact: ContactSection {
                heading: "Contact".to_string(),
                blurb: "[Placeholder text for contact information]".to_string(),
                call_to_action: "Get in Touch".to_string(),
                endpoint: "/api/contact".to_string(),
            },
        }
    }
}
