//! Modern Pro - each section gets its own color-coded accent spine.

use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const INK: Rgb = Rgb::new(0x11, 0x18, 0x27);
const MUTED: Rgb = Rgb::new(0x4b, 0x55, 0x63);
const BLUE: Rgb = Rgb::new(0x25, 0x63, 0xeb);
const GREEN: Rgb = Rgb::new(0x05, 0x96, 0x69);
const ORANGE: Rgb = Rgb::new(0xea, 0x58, 0x0c);
const PURPLE: Rgb = Rgb::new(0x7c, 0x3a, 0xed);
const TEAL: Rgb = Rgb::new(0x0d, 0x94, 0x88);
const ROSE: Rgb = Rgb::new(0xe1, 0x1d, 0x48);
const SLATE: Rgb = Rgb::new(0x47, 0x55, 0x69);

pub struct ModernProTemplate;

impl TemplateRenderer for ModernProTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root().padding(Edges::all(26.0)).gap(14.0);

        let mut masthead = Block::new()
            .background(Rgb::new(0xf8, 0xfa, 0xfc))
            .padding(Edges::all(16.0))
            .gap(4.0)
            .child(Text::new(display_name(info)).size(24.0).bold().color(INK));
        if !info.summary.trim().is_empty() {
            masthead = masthead.child(Text::new(info.summary.trim()).size(10.0).color(MUTED));
        }
        let reach = contact_parts(info)
            .into_iter()
            .chain(link_parts(info))
            .collect::<Vec<_>>()
            .join("  ·  ");
        if !reach.is_empty() {
            masthead = masthead.child(Text::new(reach).size(9.0).color(BLUE));
        }
        page = page.child(masthead);

        let bullet_style = TextStyle {
            size: 10.0,
            color: MUTED,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = spine_section("Experience", BLUE);
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(8.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&work.position).size(11.5).bold().color(INK))
                        .child(Text::new(work_dates(work)).size(9.0).bold().color(BLUE).right()),
                );
                let place = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" · ");
                if !place.is_empty() {
                    entry = entry.child(Text::new(place).size(10.0).color(MUTED));
                }
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "• "));
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = spine_section("Projects", GREEN);
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(8.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&project.name).size(11.0).bold().color(INK))
                        .child(
                            Text::new(date_range(&project.start_date, &project.end_date, false))
                                .size(9.0)
                                .color(GREEN)
                                .right(),
                        ),
                );
                if !project.description.trim().is_empty() {
                    entry = entry.child(Text::new(project.description.trim()).size(10.0).color(MUTED));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        Text::new(project.technologies.join(" · ")).size(9.0).color(GREEN),
                    );
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.education) {
            let mut section = spine_section("Education", ORANGE);
            for edu in &data.education {
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&edu.institution).size(11.0).bold().color(INK))
                        .child(
                            Text::new(date_range(&edu.start_date, &edu.end_date, false))
                                .size(9.0)
                                .color(ORANGE)
                                .right(),
                        ),
                );
                if !degree.is_empty() {
                    entry = entry.child(Text::new(degree).size(10.0).color(MUTED));
                }
                if let Some(gpa) = opt_text(&edu.gpa) {
                    entry = entry.child(Text::new(format!("GPA: {gpa}")).size(9.0).color(MUTED));
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = spine_section("Skills", PURPLE);
            for (category, members) in grouped_skills(&data.skills) {
                let names = members
                    .iter()
                    .map(|s| format!("{} · {}", s.name, s.level.label()))
                    .collect::<Vec<_>>()
                    .join("   ");
                section = section.child(Text::new(category).size(10.0).bold().color(PURPLE));
                section = section.child(Text::new(names).size(9.5).color(MUTED));
            }
            page = page.child(section);
        }

        if has_entries(&data.certificates) {
            let mut section = spine_section("Certificates", TEAL);
            for cert in &data.certificates {
                let mut line = cert.name.trim().to_string();
                if !cert.issuer.trim().is_empty() {
                    line.push_str(&format!(" · {}", cert.issuer.trim()));
                }
                if !cert.issue_date.trim().is_empty() {
                    line.push_str(&format!(" · {}", cert.issue_date.trim()));
                }
                section = section.child(Text::new(line).size(10.0).color(MUTED));
            }
            page = page.child(section);
        }

        if has_entries(&data.achievements) {
            let mut section = spine_section("Achievements", ROSE);
            for ach in &data.achievements {
                let mut entry = Block::new().gap(1.0).margin_bottom(5.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&ach.title).size(10.5).bold().color(INK))
                        .child(Text::new(ach.date.trim()).size(9.0).color(ROSE).right()),
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
            page = page.child(
                spine_section("Hobbies", SLATE).child(Text::new(names).size(9.5).color(MUTED)),
            );
        }

        VisualDocument::new(page)
    }
}

fn spine_section(title: &str, accent: Rgb) -> Block {
    Block::new()
        .border_left(Border::new(4.0, accent))
        .padding(Edges {
            left: 12.0,
            ..Default::default()
        })
        .gap(5.0)
        .child(Text::new(title.to_uppercase()).size(11.5).bold().color(accent))
}
