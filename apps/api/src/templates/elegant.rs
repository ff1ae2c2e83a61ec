//! Elegant - serif with hairline dividers and muted gold accents.

use crate::layout::FontFamily;
use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument, Width};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const INK: Rgb = Rgb::new(0x2d, 0x2a, 0x26);
const GOLD: Rgb = Rgb::new(0x9a, 0x7b, 0x4f);
const MUTED: Rgb = Rgb::new(0x6e, 0x66, 0x5c);
const HAIR: Rgb = Rgb::new(0xe0, 0xdb, 0xd3);

pub struct ElegantTemplate;

impl TemplateRenderer for ElegantTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root().padding(Edges::symmetric(36.0, 46.0)).gap(15.0);

        let mut masthead = Block::new().gap(4.0);
        masthead = masthead.child(serif(&display_name(info), 27.0).center());
        masthead = masthead.child(
            Block::new()
                .row()
                .gap(0.0)
                .child(Block::new())
                .child(Block::new().width(Width::Px(80.0)).border_bottom(Border::new(2.0, GOLD)).min_height(3.0))
                .child(Block::new()),
        );
        let contact = contact_parts(info).join("  ·  ");
        if !contact.is_empty() {
            masthead = masthead.child(serif(&contact, 9.5).color(MUTED).center());
        }
        let links = link_parts(info).join("  ·  ");
        if !links.is_empty() {
            masthead = masthead.child(serif(&links, 9.0).color(MUTED).center());
        }
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
            let mut section = gold_heading("Experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
                entry = entry.child(serif(&work.position, 12.5).bold());
                let sub = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut line = Block::new().row();
                if !sub.is_empty() {
                    line = line.child(serif(&sub, 10.5).italic().color(GOLD));
                }
                line = line.child(serif(&work_dates(work), 9.5).color(MUTED).right());
                entry = entry.child(line);
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "·  "));
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.education) {
            let mut section = gold_heading("Education");
            for edu in &data.education {
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" in ");
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(serif(&edu.institution, 12.0).bold());
                let mut line = Block::new().row();
                if !degree.is_empty() {
                    line = line.child(serif(&degree, 10.5).italic().color(GOLD));
                }
                line = line.child(
                    serif(&date_range(&edu.start_date, &edu.end_date, false), 9.5)
                        .color(MUTED)
                        .right(),
                );
                entry = entry.child(line);
                if let Some(gpa) = opt_text(&edu.gpa) {
                    entry = entry.child(serif(&format!("GPA: {gpa}"), 9.5).color(MUTED));
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        let mut left = Block::new().gap(13.0);
        let mut right = Block::new().gap(13.0);
        let mut split_used = false;

        if has_entries(&data.skills) {
            let mut section = gold_heading("Skills");
            for (category, members) in grouped_skills(&data.skills) {
                section = section.child(serif(&category, 10.5).bold().color(GOLD));
                let names = members
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                section = section.child(serif(&names, 10.0));
            }
            left = left.child(section);
            split_used = true;
        }

        if has_entries(&data.certificates) {
            let mut section = gold_heading("Certificates");
            for cert in &data.certificates {
                section = section.child(serif(&cert.name, 10.5).bold());
                let mut line = cert.issuer.trim().to_string();
                if !cert.issue_date.trim().is_empty() {
                    if !line.is_empty() {
                        line.push_str(", ");
                    }
                    line.push_str(cert.issue_date.trim());
                }
                if !line.is_empty() {
                    section = section.child(serif(&line, 9.5).italic().color(MUTED));
                }
            }
            right = right.child(section);
            split_used = true;
        }

        if has_entries(&data.projects) {
            let mut section = gold_heading("Projects");
            for project in &data.projects {
                section = section.child(serif(&project.name, 11.0).bold());
                if !project.description.trim().is_empty() {
                    section = section.child(serif(project.description.trim(), 10.0));
                }
                if !project.technologies.is_empty() {
                    section = section.child(
                        serif(&project.technologies.join(", "), 9.0).italic().color(MUTED),
                    );
                }
            }
            left = left.child(section);
            split_used = true;
        }

        if has_entries(&data.achievements) {
            let mut section = gold_heading("Achievements");
            for ach in &data.achievements {
                section = section.child(serif(&ach.title, 10.5).bold());
                if !ach.description.trim().is_empty() {
                    section = section.child(serif(ach.description.trim(), 9.5).color(MUTED));
                }
            }
            right = right.child(section);
            split_used = true;
        }

        if has_entries(&data.hobbies) {
            let names = data
                .hobbies
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join("  ·  ");
            right = right.child(gold_heading("Hobbies").child(serif(&names, 10.0)));
            split_used = true;
        }

        if split_used {
            page = page.child(Block::new().row().gap(24.0).child(left).child(right));
        }

        VisualDocument::new(page)
    }
}

fn serif(content: &str, size: f32) -> Text {
    Text::new(content).family(FontFamily::Serif).size(size).color(INK)
}

fn gold_heading(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .border_bottom(Border::new(1.0, HAIR))
            .child(serif(&title.to_uppercase(), 11.0).bold().color(GOLD)),
    )
}
