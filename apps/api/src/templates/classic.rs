//! Classic - traditional centered serif layout.

use crate::layout::FontFamily;
use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const INK: Rgb = Rgb::new(0x26, 0x26, 0x26);
const MUTED: Rgb = Rgb::new(0x57, 0x53, 0x4e);
const RULE: Rgb = Rgb::new(0x8a, 0x85, 0x7d);

pub struct ClassicTemplate;

impl TemplateRenderer for ClassicTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root().padding(Edges::symmetric(34.0, 44.0)).gap(14.0);

        let mut masthead = Block::new().gap(3.0).child(
            serif(&display_name(info), 24.0).bold().center(),
        );
        let contact = contact_parts(info).join(" | ");
        if !contact.is_empty() {
            masthead = masthead.child(serif(&contact, 9.5).color(MUTED).center());
        }
        let links = link_parts(info).join(" | ");
        if !links.is_empty() {
            masthead = masthead.child(serif(&links, 9.0).color(MUTED).center());
        }
        masthead = masthead.child(Block::new().border_bottom(Border::new(1.5, RULE)).min_height(2.0));
        if !info.summary.trim().is_empty() {
            masthead = masthead.child(serif(info.summary.trim(), 10.5).italic().center());
        }
        page = page.child(masthead);

        let bullet_style = TextStyle {
            family: FontFamily::Serif,
            size: 10.5,
            color: INK,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = centered_heading("Experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(serif(&work.position, 12.0).bold())
                        .child(serif(&work_dates(work), 10.0).color(MUTED).right()),
                );
                let employer = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if !employer.is_empty() {
                    entry = entry.child(serif(&employer, 10.5).italic().color(MUTED));
                }
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "• "));
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.education) {
            let mut section = centered_heading("Education");
            for edu in &data.education {
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" in ");
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0).child(
                    Block::new()
                        .row()
                        .child(serif(&edu.institution, 11.5).bold())
                        .child(
                            serif(&date_range(&edu.start_date, &edu.end_date, false), 10.0)
                                .color(MUTED)
                                .right(),
                        ),
                );
                if !degree.is_empty() {
                    entry = entry.child(serif(&degree, 10.5).italic().color(MUTED));
                }
                if let Some(desc) = opt_text(&edu.description) {
                    entry = entry.child(serif(desc, 10.0).color(MUTED));
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = centered_heading("Skills");
            for (category, members) in grouped_skills(&data.skills) {
                let names = members
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                section = section.child(serif(&format!("{category}: {names}"), 10.5).center());
            }
            page = page.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = centered_heading("Projects");
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(serif(&project.name, 11.5).bold());
                if !project.description.trim().is_empty() {
                    entry = entry.child(serif(project.description.trim(), 10.5));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        serif(&project.technologies.join(", "), 9.5).italic().color(MUTED),
                    );
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.certificates) {
            let mut section = centered_heading("Certificates");
            for cert in &data.certificates {
                let mut line = cert.name.trim().to_string();
                if !cert.issuer.trim().is_empty() {
                    line.push_str(&format!(", {}", cert.issuer.trim()));
                }
                if !cert.issue_date.trim().is_empty() {
                    line.push_str(&format!(" ({})", cert.issue_date.trim()));
                }
                section = section.child(serif(&line, 10.5).center());
            }
            page = page.child(section);
        }

        if has_entries(&data.achievements) {
            let mut section = centered_heading("Achievements");
            for ach in &data.achievements {
                let mut line = ach.title.trim().to_string();
                if let Some(org) = opt_text(&ach.organization) {
                    line.push_str(&format!(", {org}"));
                }
                if !ach.date.trim().is_empty() {
                    line.push_str(&format!(" ({})", ach.date.trim()));
                }
                section = section.child(serif(&line, 10.5).center());
                if !ach.description.trim().is_empty() {
                    section = section.child(serif(ach.description.trim(), 10.0).color(MUTED).center());
                }
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
            page = page.child(centered_heading("Hobbies").child(serif(&names, 10.5).center()));
        }

        VisualDocument::new(page)
    }
}

fn serif(content: &str, size: f32) -> Text {
    Text::new(content).family(FontFamily::Serif).size(size).color(INK)
}

fn centered_heading(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .border_bottom(Border::new(1.0, RULE))
            .child(serif(&title.to_uppercase(), 11.5).bold().center()),
    )
}
