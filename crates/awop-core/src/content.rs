//! Static content: the identity axes shown on the wheel and the categories
//! they are grouped into.
//!
//! The dataset is read-only and keyed by axis name. Category order is fixed and
//! drives both the token layout around the wheel and the category segment of
//! the URL hash.

use crate::band::Band;

/// Color used when a category key has no entry in [`CATEGORIES`].
pub const UNKNOWN_CATEGORY_COLOR: &str = "#999999";
pub const UNKNOWN_CATEGORY_LABEL: &str = "Unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtectionStatus {
    Protected,
    Partial,
    NotProtected,
}

impl ProtectionStatus {
    /// CSS class / wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            ProtectionStatus::Protected => "protected",
            ProtectionStatus::Partial => "partial",
            ProtectionStatus::NotProtected => "not-protected",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProtectionStatus::Protected => "✓",
            ProtectionStatus::Partial => "◐",
            ProtectionStatus::NotProtected => "✗",
        }
    }
}

/// Jurisdiction-specific legal annotation, displayed verbatim.
#[derive(Clone, Copy, Debug)]
pub struct LegalProtection {
    pub status: ProtectionStatus,
    pub title: &'static str,
    pub text: &'static str,
}

/// Band-indexed description of where someone sits on one axis.
#[derive(Clone, Copy, Debug)]
pub struct Spectrum {
    pub outer: &'static str,
    pub middle: &'static str,
    pub inner: &'static str,
}

impl Spectrum {
    pub fn label(&self, band: Band) -> &'static str {
        match band {
            Band::Inner => self.inner,
            Band::Middle => self.middle,
            Band::Outer => self.outer,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AxisContent {
    pub name: &'static str,
    pub category: &'static str,
    pub spectrum: Spectrum,
    pub description: &'static str,
    pub protection: LegalProtection,
}

#[derive(Clone, Copy, Debug)]
pub struct CategoryContent {
    pub name: &'static str,
    /// Informational sector angle in degrees; not used for band logic.
    pub angle_degrees: f32,
    pub description: &'static str,
    pub color: &'static str,
}

/// Read-only view over the axis and category tables.
#[derive(Clone, Copy, Debug)]
pub struct Dataset {
    pub axes: &'static [AxisContent],
    pub categories: &'static [CategoryContent],
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            axes: AXES,
            categories: CATEGORIES,
        }
    }
}

impl Dataset {
    pub fn axis(&self, name: &str) -> Option<&'static AxisContent> {
        self.axes.iter().find(|a| a.name == name)
    }

    pub fn category(&self, name: &str) -> Option<&'static CategoryContent> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    /// Display color for a category, falling back to a neutral grey.
    pub fn category_color(&self, name: &str) -> &'static str {
        self.category(name)
            .map(|c| c.color)
            .unwrap_or(UNKNOWN_CATEGORY_COLOR)
    }

    /// Axis names belonging to `category`, in dataset order.
    pub fn axes_in(&self, category: &str) -> Vec<&'static str> {
        self.axes
            .iter()
            .filter(|a| a.category == category)
            .map(|a| a.name)
            .collect()
    }

    /// Axes ordered by category position; stable within a category.
    /// Axes with an unknown category sort after every known one.
    pub fn layout_order(&self) -> Vec<&'static AxisContent> {
        let mut ordered: Vec<&'static AxisContent> = self.axes.iter().collect();
        ordered.sort_by_key(|a| self.category_index(a.category).unwrap_or(usize::MAX));
        ordered
    }
}

/// Lowercase, whitespace to `-`, and drop everything outside `[a-z0-9-]`.
/// Used to look up `--cat-<slug>` theme variables.
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_space = false;
    for ch in lower.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            out.push(ch);
        }
    }
    out
}

const fn axis(
    name: &'static str,
    category: &'static str,
    spectrum: [&'static str; 3],
    description: &'static str,
    protection: LegalProtection,
) -> AxisContent {
    AxisContent {
        name,
        category,
        spectrum: Spectrum {
            outer: spectrum[0],
            middle: spectrum[1],
            inner: spectrum[2],
        },
        description,
        protection,
    }
}

const fn law(status: ProtectionStatus, title: &'static str, text: &'static str) -> LegalProtection {
    LegalProtection {
        status,
        title,
        text,
    }
}

use ProtectionStatus::{NotProtected, Partial, Protected};

pub static CATEGORIES: &[CategoryContent] = &[
    CategoryContent {
        name: "Living and Culture",
        angle_degrees: 0.0,
        description: "Factors related to cultural background, identity, and lived experience in society.",
        color: "#e76f51",
    },
    CategoryContent {
        name: "Caregiving",
        angle_degrees: 51.4,
        description: "Responsibilities for caring for others that can impact time and energy available for academic work.",
        color: "#f4a261",
    },
    CategoryContent {
        name: "Education and Career",
        angle_degrees: 102.8,
        description: "Formal educational background, career stage, and access to academic resources and networks.",
        color: "#e9c46a",
    },
    CategoryContent {
        name: "Gender and Sexuality",
        angle_degrees: 154.2,
        description: "Gender identity and sexual orientation, which affect representation and experiences in academia.",
        color: "#b56576",
    },
    CategoryContent {
        name: "Socioeconomic",
        angle_degrees: 205.6,
        description: "Current financial status and access to material resources that enable academic participation.",
        color: "#2a9d8f",
    },
    CategoryContent {
        name: "Health and Wellbeing",
        angle_degrees: 257.0,
        description: "Physical and mental health factors that affect ability to participate fully in academic life.",
        color: "#457b9d",
    },
    CategoryContent {
        name: "Childhood and Development",
        angle_degrees: 308.4,
        description: "Early life experiences that shape educational opportunities and cultural capital.",
        color: "#8d6cab",
    },
];

pub static AXES: &[AxisContent] = &[
    axis(
        "Skin Color",
        "Living and Culture",
        ["Dark", "Various shades", "White"],
        "Skin color affects how individuals are perceived and treated in academic and social settings. Lighter skin tones are often associated with greater privilege in Western academic contexts.",
        law(Protected, "Protected Characteristic", "Race, including skin color, is a protected characteristic under the Equality Act 2010. Discrimination based on skin color is unlawful in employment, education, and services."),
    ),
    axis(
        "Religion and Culture",
        "Living and Culture",
        ["Not widely accepted", "Usually accepted", "Widely accepted"],
        "Religious and cultural backgrounds influence access to academic networks, understanding of hidden curricula, and ability to participate fully in academic life.",
        law(Protected, "Protected Characteristic", "Religion or belief is a protected characteristic under the Equality Act 2010. This includes religious and philosophical beliefs, as well as lack of belief."),
    ),
    axis(
        "Citizenship",
        "Living and Culture",
        ["Undocumented", "Documented", "Citizen"],
        "Citizenship status affects access to funding, employment opportunities, and the ability to participate freely in academic activities without visa restrictions.",
        law(Partial, "Partial Protection", "While nationality can be related to the protected characteristic of race, immigration status itself is not directly protected. However, indirect discrimination based on nationality may be unlawful."),
    ),
    axis(
        "Language",
        "Living and Culture",
        ["Non-English monolingual", "Learned English", "Native English"],
        "English language proficiency significantly impacts academic success, publication opportunities, and networking in predominantly Anglophone academic environments.",
        law(Partial, "Indirect Protection", "Language is not a protected characteristic, but discrimination based on language may constitute indirect race discrimination if it disproportionately affects certain ethnic groups."),
    ),
    axis(
        "Caring Duties",
        "Caregiving",
        ["Sole carer", "Shared care", "No care duties"],
        "Caring responsibilities for children, elderly relatives, or others significantly impact time available for research, networking, and career advancement.",
        law(Partial, "Indirect Protection", "While caring duties aren't directly protected, discrimination against carers may constitute indirect sex discrimination (as women disproportionately bear caring responsibilities) under the Equality Act 2010."),
    ),
    axis(
        "Caregiver Educational Level",
        "Education and Career",
        ["Primary/Secondary", "Tertiary", "Advanced degrees"],
        "Parents' or caregivers' educational background influences cultural capital, understanding of academic systems, and access to guidance and networks.",
        law(NotProtected, "Not Directly Protected", "Parental education level is not a protected characteristic. However, it relates to socioeconomic background, which the Equality Act 2010 does not directly cover."),
    ),
    axis(
        "Formal Education",
        "Education and Career",
        ["None", "Limited", "Degree(s)"],
        "Level of formal education affects access to academic positions, credibility in scholarly discussions, and ability to navigate academic institutions.",
        law(NotProtected, "Not Directly Protected", "Educational qualifications are not a protected characteristic. Requiring qualifications is generally lawful if justified for the role."),
    ),
    axis(
        "Funding/Resources",
        "Education and Career",
        ["None/Very low", "Medium", "High"],
        "Access to research funding and institutional resources determines capacity to conduct research, attend conferences, and publish in prestigious venues.",
        law(NotProtected, "Not Directly Protected", "Access to funding is not a protected characteristic, though funding disparities may intersect with protected characteristics like race or disability."),
    ),
    axis(
        "Career Stage",
        "Education and Career",
        ["Early career", "Mid-career", "Late career/Tenured"],
        "Career stage affects job security, influence in academic decisions, and access to resources and networks that support career advancement.",
        law(Protected, "Related to Age Protection", "Age is a protected characteristic under the Equality Act 2010. Career stage discrimination may constitute age discrimination if it disproportionately affects certain age groups."),
    ),
    axis(
        "Institution",
        "Education and Career",
        ["Teaching intensive", "Equal teaching/research", "Research intensive"],
        "Type of institution affects time for research, access to funding, prestige, and career progression opportunities in academia.",
        law(NotProtected, "Not Directly Protected", "Institutional type is not a protected characteristic. However, institutional prestige hierarchies may reinforce existing inequalities."),
    ),
    axis(
        "Gender",
        "Gender and Sexuality",
        ["Trans/Non-binary/Intersex", "Cis woman", "Cis man"],
        "Gender identity and expression affect experiences of discrimination, access to opportunities, and representation in academic leadership positions.",
        law(Protected, "Protected Characteristics", "Sex and gender reassignment are protected characteristics under the Equality Act 2010. This protects against discrimination based on being male, female, or undergoing gender transition."),
    ),
    axis(
        "Sexuality",
        "Gender and Sexuality",
        ["Lesbian/Bi/Pan/Asexual", "Gay man", "Heterosexual"],
        "Sexual orientation influences experiences of inclusion or exclusion in academic environments and can affect career progression and wellbeing.",
        law(Protected, "Protected Characteristic", "Sexual orientation is a protected characteristic under the Equality Act 2010. Discrimination based on being lesbian, gay, bisexual, or heterosexual is unlawful."),
    ),
    axis(
        "Current Wealth",
        "Socioeconomic",
        ["Poor", "Middle class", "Rich"],
        "Current wealth affects ability to access education, take unpaid opportunities, relocate for positions, and weather periods of job insecurity.",
        law(NotProtected, "Not Directly Protected", "Socioeconomic status is not a protected characteristic under the Equality Act 2010, though the Public Sector Equality Duty includes consideration of socioeconomic disadvantage in some contexts."),
    ),
    axis(
        "Housing",
        "Socioeconomic",
        ["Homeless", "Renting", "Owns property"],
        "Housing stability affects ability to focus on academic work, access to quiet study spaces, and financial security needed for career risk-taking.",
        law(NotProtected, "Not Directly Protected", "Housing status is not a protected characteristic. However, housing discrimination may intersect with protected characteristics like race or disability."),
    ),
    axis(
        "Neurodiversity",
        "Health and Wellbeing",
        ["Multiply neurodivergent", "Some neurodivergence", "Neurotypical"],
        "Neurodivergent individuals (autism, ADHD, dyslexia, etc.) face unique challenges in academic environments designed for neurotypical people, including sensory issues and executive function demands.",
        law(Protected, "Protected Under Disability", "Neurodevelopmental conditions that have a substantial and long-term adverse effect on ability to carry out normal day-to-day activities are protected as disabilities under the Equality Act 2010."),
    ),
    axis(
        "Mental Health",
        "Health and Wellbeing",
        ["Vulnerable", "Mostly stable", "Robust"],
        "Mental health affects capacity to manage academic pressures, maintain productivity, and navigate competitive and often stressful academic environments.",
        law(Protected, "Protected Under Disability", "Mental health conditions that have a substantial and long-term adverse effect on day-to-day activities are protected as disabilities under the Equality Act 2010."),
    ),
    axis(
        "Disability",
        "Health and Wellbeing",
        ["Multiply disabled", "Some disability", "Able-bodied"],
        "Physical disabilities affect access to academic spaces, travel for conferences, and ability to perform certain research tasks without accommodations.",
        law(Protected, "Protected Characteristic", "Disability is a protected characteristic under the Equality Act 2010. Employers and institutions have a duty to make reasonable adjustments for disabled individuals."),
    ),
    axis(
        "Body Size",
        "Health and Wellbeing",
        ["Large", "Average", "Slim"],
        "Body size affects how individuals are perceived professionally, can influence hiring decisions, and impacts experiences of belonging in academic settings.",
        law(NotProtected, "Not Directly Protected", "Body size or weight is not a protected characteristic under the Equality Act 2010. However, obesity may be considered a disability in some cases if it meets the legal definition."),
    ),
    axis(
        "Childhood Household Wealth",
        "Childhood and Development",
        ["Poor", "Middle class", "Rich"],
        "Childhood socioeconomic status affects educational opportunities, cultural capital, and networks that influence later academic success.",
        law(NotProtected, "Not Directly Protected", "Childhood socioeconomic background is not a protected characteristic, though it significantly influences life outcomes and intersects with protected characteristics."),
    ),
    axis(
        "Childhood Household Stability",
        "Childhood and Development",
        ["Unstable", "Mostly stable", "Stable"],
        "Childhood stability affects attachment, mental health, and ability to develop skills and networks that support academic success.",
        law(NotProtected, "Not Directly Protected", "Childhood experiences are not protected characteristics, though adverse childhood experiences may result in conditions that are protected as disabilities."),
    ),
];
