//! Academic - formal centered serif layout, education before experience.

use crate::layout::FontFamily;
use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const INK: Rgb = Rgb::new(0x1c, 0x1c, 0x1c);
const MUTED: Rgb = Rgb::new(0x4a, 0x4a, 0x4a);
const RULE: Rgb = Rgb::new(0x33, 0x33, 0x33);

pub struct AcademicTemplate;

impl TemplateRenderer for AcademicTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root().padding(Edges::symmetric(38.0, 50.0)).gap(13.0);

        let mut masthead = Block::new()
            .gap(3.0)
            .border_bottom(Border::new(1.0, RULE))
            .padding(Edges {
                bottom: 10.0,
                ..Default::default()
            })
            .child(serif(&display_name(info), 22.0).bold().center());
        let contact = contact_parts(info).join(" · ");
        if !contact.is_empty() {
            masthead = masthead.child(serif(&contact, 9.5).color(MUTED).center());
        }
        let links = link_parts(info).join(" · ");
        if !links.is_empty() {
            masthead = masthead.child(serif(&links, 9.0).color(MUTED).center());
        }
        page = page.child(masthead);

        if !info.summary.trim().is_empty() {
            page = page.child(
                plain_heading("Research Profile").child(serif(info.summary.trim(), 10.5)),
            );
        }

        // education leads on an academic CV
        if has_entries(&data.education) {
            let mut section = plain_heading("Education");
            for edu in &data.education {
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" in ");
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(serif(&(if degree.is_empty() {
                            edu.institution.trim().to_string()
                        } else {
                            degree
                        }), 11.5).bold())
                        .child(
                            serif(&date_range(&edu.start_date, &edu.end_date, false), 9.5)
                                .color(MUTED)
                                .right(),
                        ),
                );
                entry = entry.child(serif(&edu.institution, 10.5).italic().color(MUTED));
                if let Some(gpa) = opt_text(&edu.gpa) {
                    entry = entry.child(serif(&format!("GPA: {gpa}"), 9.5).color(MUTED));
                }
                if let Some(desc) = opt_text(&edu.description) {
                    entry = entry.child(serif(desc, 9.5).color(MUTED));
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        let bullet_style = TextStyle {
            family: FontFamily::Serif,
            size: 10.0,
            color: INK,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = plain_heading("Appointments & Experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(8.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(serif(&work.position, 11.5).bold())
                        .child(serif(&work_dates(work), 9.5).color(MUTED).right()),
                );
                let place = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if !place.is_empty() {
                    entry = entry.child(serif(&place, 10.0).italic().color(MUTED));
                }
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "• "));
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.achievements) {
            let mut section = plain_heading("Honors & Achievements");
            for ach in &data.achievements {
                let mut line = ach.title.trim().to_string();
                if let Some(org) = opt_text(&ach.organization) {
                    line.push_str(&format!(", {org}"));
                }
                let mut entry = Block::new().row().margin_bottom(3.0).child(serif(&line, 10.5));
                if !ach.date.trim().is_empty() {
                    entry = entry.child(serif(ach.date.trim(), 9.5).color(MUTED).right());
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = plain_heading("Research Projects");
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(serif(&project.name, 11.0).bold());
                if !project.description.trim().is_empty() {
                    entry = entry.child(serif(project.description.trim(), 10.0));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        serif(&format!("Methods: {}", project.technologies.join(", ")), 9.0)
                            .italic()
                            .color(MUTED),
                    );
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = plain_heading("Skills");
            for (category, members) in grouped_skills(&data.skills) {
                let names = members
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                section = section.child(serif(&format!("{category}: {names}"), 10.0));
            }
            page = page.child(section);
        }

        if has_entries(&data.certificates) {
            let mut section = plain_heading("Certificates");
            for cert in &data.certificates {
                let mut line = cert.name.trim().to_string();
                if !cert.issuer.trim().is_empty() {
                    line.push_str(&format!(", {}", cert.issuer.trim()));
                }
                if !cert.issue_date.trim().is_empty() {
                    line.push_str(&format!(" ({})", cert.issue_date.trim()));
                }
                section = section.child(serif(&line, 10.0));
            }
            page = page.child(section);
        }

        if has_entries(&data.hobbies) {
            let names = data
                .hobbies
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            page = page.child(plain_heading("Hobbies").child(serif(&names, 10.0)));
        }

        VisualDocument::new(page)
    }
}

fn serif(content: &str, size: f32) -> Text {
    Text::new(content).family(FontFamily::Serif).size(size).color(INK)
}

fn plain_heading(title: &str) -> Block {
    Block::new().gap(4.0).child(
        Block::new()
            .border_bottom(Border::new(1.0, RULE))
            .child(serif(&title.to_uppercase(), 11.0).bold()),
    )
}
