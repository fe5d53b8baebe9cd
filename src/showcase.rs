// src/showcase.rs
//! Fixed datasets the viewer composes into its pages: the trend
//! projections, the domain × skill heat grid and the bubble set, plus
//! built-in sector, skill and timeline sets for when no CSV is reachable.
use crate::geometry::{Bubble, HeatCell, TrendPoint};
use crate::records::{SectorRecord, SkillCategoryRecord, SkillValue, TimelineEventRecord, TimelineYear};

const JOBS_LOST: &str = "Jobs Lost";
const JOBS_CREATED: &str = "Jobs Created";
const RESKILLING: &str = "Workers Needing Reskilling";

/// Share of roles the Trends page gauge shows.
pub const TRANSFORMED_ROLES_PCT: f64 = 65.0;
/// Share of workers the isotype grid highlights.
pub const RESKILLED_WORKERS_PCT: f64 = 50.0;

pub fn trend_points() -> Vec<TrendPoint> {
    [
        (2023.0, 30.0, "Generative AI adoption begins", JOBS_LOST),
        (2025.0, 45.0, "Routine task automation accelerates", JOBS_LOST),
        (2027.0, 65.0, "Mass transformation of knowledge work", JOBS_LOST),
        (2030.0, 85.0, "AI-powered automation mature", JOBS_LOST),
        (2023.0, 20.0, "AI knowledge jobs emerge", JOBS_CREATED),
        (2025.0, 35.0, "New AI-adjacent roles expand", JOBS_CREATED),
        (2027.0, 60.0, "AI integration specialists in demand", JOBS_CREATED),
        (2030.0, 95.0, "AI-native job ecosystem matures", JOBS_CREATED),
        (2023.0, 15.0, "Early adopters pursue reskilling", RESKILLING),
        (2025.0, 30.0, "Mid-career professionals affected", RESKILLING),
        (2027.0, 40.0, "Technical workforce transforms", RESKILLING),
        (2030.0, 50.0, "Half of global workforce reskilled", RESKILLING),
    ]
    .into_iter()
    .map(|(year, value, label, cat)| TrendPoint::new(year, value, label, cat))
    .collect()
}

pub fn heat_cells() -> Vec<HeatCell> {
    const ROWS: [(&str, [(f64, &str); 5]); 5] = [
        ("Finance", [
            (95.0, "Almost complete automation potential"),
            (75.0, "High automation with exception handling"),
            (65.0, "Significant AI augmentation"),
            (40.0, "Human oversight still critical"),
            (25.0, "Human touch remains essential"),
        ]),
        ("Healthcare", [
            (90.0, "Records and data management automated"),
            (50.0, "Blend of AI and human touch needed"),
            (45.0, "AI assisting with diagnostics"),
            (20.0, "Human medical judgment essential"),
            (10.0, "Patient care remains human-centered"),
        ]),
        ("Retail", [
            (95.0, "Inventory and ordering automated"),
            (80.0, "Most interactions handled by AI"),
            (70.0, "AI-driven customer insights dominant"),
            (50.0, "AI increasingly guiding business decisions"),
            (40.0, "Personalized AI engagements growing"),
        ]),
        ("Education", [
            (85.0, "Administrative tasks automated"),
            (40.0, "Student support partially automated"),
            (35.0, "Learning analytics AI-augmented"),
            (25.0, "Curriculum development human-guided"),
            (15.0, "Teacher-student bonds remain essential"),
        ]),
        ("Technology", [
            (90.0, "Data pipeline automation near-complete"),
            (75.0, "AI handling most technical support"),
            (50.0, "Complex analysis human-AI collaboration"),
            (35.0, "AI informing but not driving strategy"),
            (30.0, "Client relationships increasingly digital"),
        ]),
    ];
    const SKILLS: [&str; 5] = ["Data Processing", "Customer Service", "Analysis", "Strategy", "Relationship"];

    ROWS.iter()
        .flat_map(|(domain, cells)| {
            cells
                .iter()
                .zip(SKILLS)
                .map(move |((value, tip), skill)| HeatCell::new(domain, skill, *value, Some(*tip)))
        })
        .collect()
}

pub fn bubbles() -> Vec<Bubble> {
    [
        ("1", 85.0, "Data Entry", "Administrative"),
        ("2", 80.0, "Call Centers", "Customer Service"),
        ("3", 73.0, "Bookkeeping", "Finance"),
        ("4", 69.0, "Market Research", "Marketing"),
        ("5", 65.0, "Software Dev", "Technology"),
        ("6", 58.0, "Design", "Creative"),
        ("7", 50.0, "Financial Analysis", "Finance"),
        ("8", 42.0, "Radiology", "Healthcare"),
        ("9", 36.0, "Content Creation", "Creative"),
        ("10", 26.0, "Teaching", "Education"),
        ("11", 15.0, "Nursing", "Healthcare"),
        ("12", 10.0, "Therapy", "Healthcare"),
    ]
    .into_iter()
    .map(|(id, value, label, cat)| {
        Bubble::new(id, label, value, cat).with_description(&format!("{}% automation risk", value))
    })
    .collect()
}

pub fn fallback_sectors() -> Vec<SectorRecord> {
    [
        ("Healthcare", 22.0, "#0EA5E9", "Expected to add 3-4M jobs (U.S.)"),
        ("STEM", 23.0, "#9381FF", "23% projected demand increase by 2030"),
        ("Finance", 87.0, "#F87171", "87% of tasks could be automated"),
        ("Retail", 80.0, "#F87171", "Up to 80% automation potential"),
        ("Manufacturing", 78.0, "#F87171", "Up to 78% automation potential"),
        ("Transportation", 65.0, "#F87171", "Truck drivers face 65% automation risk"),
        ("Education", 26.0, "#0EA5E9", "Growing demand despite 26% automation"),
        ("Creative Arts", 35.0, "#10B981", "Human creativity still valued"),
    ]
    .into_iter()
    .map(|(label, value, color, desc)| SectorRecord::new(label, value, color, desc))
    .collect()
}

pub fn fallback_skills() -> Vec<SkillCategoryRecord> {
    let group = |category: &str, skills: &[(&str, f64)]| SkillCategoryRecord {
        category: s!(category),
        skills: skills
            .iter()
            .map(|(name, value)| SkillValue { name: s!(*name), value: *value })
            .collect(),
    };
    vec![
        group("AI Complementary Skills", &[
            ("Emotional Intelligence", 95.0),
            ("Creative Problem Solving", 90.0),
            ("Ethical Judgment", 88.0),
            ("Critical Thinking", 85.0),
            ("Interpersonal Communication", 92.0),
            ("Adaptability", 87.0),
        ]),
        group("Vulnerable Skills", &[
            ("Data Entry", 10.0),
            ("Rote Calculation", 5.0),
            ("Document Search", 15.0),
            ("Basic Translation", 20.0),
            ("Text Generation", 25.0),
            ("Image Classification", 30.0),
        ]),
    ]
}

pub fn fallback_timeline() -> Vec<TimelineEventRecord> {
    [
        (2023, "Generative AI Explosion", "Large language models transform knowledge work across industries, with sophisticated AI assistants increasingly used for content generation, coding, and analytics.", "#9381FF", "🚀"),
        (2025, "Automation of Routine Tasks", "Data entry, basic customer service, and routine analytical tasks become predominantly automated, with AI systems handling 80% of straightforward workflows.", "#F87171", "⚙️"),
        (2027, "New Job Categories Emerge", "AI trainers, ethics specialists, human-AI collaboration experts, and AI system interpreters become mainstream professions with growing demand.", "#0EA5E9", "🌱"),
        (2030, "Workforce Transformation Complete", "Over 50% of workers use AI tools daily, with 30% working in roles that didn't exist in 2023. Human-AI collaboration becomes the standard working model.", "#10B981", "🔄"),
    ]
    .into_iter()
    .map(|(year, title, description, color, icon)| TimelineEventRecord {
        year: TimelineYear::Year(year),
        title: s!(title),
        description: s!(description),
        icon_color: Some(s!(color)),
        icon: Some(s!(icon)),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_grid_is_five_by_five() {
        let cells = heat_cells();
        assert_eq!(cells.len(), 25);
        assert_eq!(cells[1].x, "Finance");
        assert_eq!(cells[1].y, "Customer Service");
        assert_eq!(cells[24].value, 30.0);
    }

    #[test]
    fn bubble_descriptions() {
        let b = bubbles();
        assert_eq!(b.len(), 12);
        assert_eq!(b[0].description.as_deref(), Some("85% automation risk"));
    }
}
