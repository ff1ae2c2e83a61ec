//! Minimalist - single column, centered heading, hairline rules.

use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const INK: Rgb = Rgb::new(0x1f, 0x29, 0x37);
const MUTED: Rgb = Rgb::new(0x6b, 0x72, 0x80);
const RULE: Rgb = Rgb::new(0xe5, 0xe7, 0xeb);

pub struct MinimalistTemplate;

impl TemplateRenderer for MinimalistTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root().padding(Edges::symmetric(36.0, 48.0)).gap(16.0);

        let mut masthead = Block::new()
            .gap(4.0)
            .border_bottom(Border::new(1.0, RULE))
            .padding(Edges {
                bottom: 14.0,
                ..Default::default()
            })
            .child(Text::new(display_name(info)).size(26.0).color(INK).center());

        let contact = contact_parts(info).join("  ·  ");
        if !contact.is_empty() {
            masthead = masthead.child(Text::new(contact).size(9.5).color(MUTED).center());
        }
        let links = link_parts(info).join("  ·  ");
        if !links.is_empty() {
            masthead = masthead.child(Text::new(links).size(9.0).color(MUTED).center());
        }
        if !info.summary.trim().is_empty() {
            masthead = masthead.child(Text::new(info.summary.trim()).size(10.0).color(INK).center());
        }
        page = page.child(masthead);

        let body = TextStyle {
            size: 10.0,
            color: INK,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = rule_section("Experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&work.position).size(11.5).bold().color(INK))
                        .child(Text::new(work_dates(work)).size(9.5).color(MUTED).right()),
                );
                let line = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if !line.is_empty() {
                    entry = entry.child(Text::new(line).size(10.0).italic().color(MUTED));
                }
                entry = entry.children(bullet_nodes(&work.description, &body, "–  "));
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.education) {
            let mut section = rule_section("Education");
            for edu in &data.education {
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&edu.institution).size(11.0).bold().color(INK))
                        .child(
                            Text::new(date_range(&edu.start_date, &edu.end_date, false))
                                .size(9.5)
                                .color(MUTED)
                                .right(),
                        ),
                );
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" in ");
                if !degree.is_empty() {
                    entry = entry.child(Text::new(degree).size(10.0).color(MUTED));
                }
                if let Some(desc) = opt_text(&edu.description) {
                    entry = entry.child(Text::new(desc).size(9.5).color(MUTED));
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = rule_section("Skills");
            for (category, members) in grouped_skills(&data.skills) {
                let names = members
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                section = section.child(
                    Text::new(format!("{category}: {names}")).size(10.0).color(INK),
                );
            }
            page = page.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = rule_section("Projects");
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(Text::new(&project.name).size(11.0).bold().color(INK));
                if !project.description.trim().is_empty() {
                    entry = entry.child(Text::new(project.description.trim()).size(10.0).color(INK));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        Text::new(project.technologies.join(", ")).size(9.0).italic().color(MUTED),
                    );
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.certificates) {
            let mut section = rule_section("Certificates");
            for cert in &data.certificates {
                let mut line = cert.name.trim().to_string();
                if !cert.issuer.trim().is_empty() {
                    line.push_str(&format!(", {}", cert.issuer.trim()));
                }
                if !cert.issue_date.trim().is_empty() {
                    line.push_str(&format!(" ({})", cert.issue_date.trim()));
                }
                section = section.child(Text::new(line).size(10.0).color(INK));
            }
            page = page.child(section);
        }

        if has_entries(&data.achievements) {
            let mut section = rule_section("Achievements");
            for ach in &data.achievements {
                let mut entry = Block::new().gap(1.0).margin_bottom(5.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&ach.title).size(10.5).bold().color(INK))
                        .child(Text::new(ach.date.trim()).size(9.5).color(MUTED).right()),
                );
                if !ach.description.trim().is_empty() {
                    entry = entry.child(Text::new(ach.description.trim()).size(9.5).color(MUTED));
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.hobbies) {
            let names = data
                .hobbies
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join("  ·  ");
            page = page.child(rule_section("Hobbies").child(Text::new(names).size(10.0).color(INK)));
        }

        VisualDocument::new(page)
    }
}

fn rule_section(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .border_bottom(Border::new(1.0, RULE))
            .child(Text::new(title.to_uppercase()).size(10.5).bold().color(MUTED)),
    )
}
