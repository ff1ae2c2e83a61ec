//! Timeline - entries hang off a vertical rail, skills as progress bars.

use crate::models::resume::{has_entries, ResumeData, Skill};
use crate::render::{Block, Border, Edges, Node, Rgb, Text, TextStyle, VisualDocument, Width};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const BLUE: Rgb = Rgb::new(0x25, 0x63, 0xeb);
const INK: Rgb = Rgb::new(0x1f, 0x29, 0x37);
const MUTED: Rgb = Rgb::new(0x64, 0x74, 0x8b);
const RAIL: Rgb = Rgb::new(0xbf, 0xdb, 0xfe);
const BAR_BG: Rgb = Rgb::new(0xe2, 0xe8, 0xf0);

pub struct TimelineTemplate;

impl TemplateRenderer for TimelineTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root().padding(Edges::all(28.0)).gap(15.0);

        let mut masthead = Block::new()
            .border_left(Border::new(5.0, BLUE))
            .padding(Edges {
                left: 14.0,
                ..Default::default()
            })
            .gap(3.0)
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
            let mut section = heading("Experience");
            for work in &data.work_experience {
                let mut body = Block::new().gap(2.0);
                body = body.child(
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
                    .join(", ");
                if !place.is_empty() {
                    body = body.child(Text::new(place).size(10.0).color(MUTED));
                }
                body = body.children(bullet_nodes(&work.description, &bullet_style, "• "));
                section = section.child(rail_entry(body));
            }
            page = page.child(section);
        }

        if has_entries(&data.education) {
            let mut section = heading("Education");
            for edu in &data.education {
                let mut body = Block::new().gap(1.0);
                body = body.child(
                    Block::new()
                        .row()
                        .child(Text::new(&edu.institution).size(11.0).bold().color(INK))
                        .child(
                            Text::new(date_range(&edu.start_date, &edu.end_date, false))
                                .size(9.0)
                                .bold()
                                .color(BLUE)
                                .right(),
                        ),
                );
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if !degree.is_empty() {
                    body = body.child(Text::new(degree).size(10.0).color(MUTED));
                }
                section = section.child(rail_entry(body));
            }
            page = page.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = heading("Projects");
            for project in &data.projects {
                let mut body = Block::new().gap(1.0);
                body = body.child(
                    Block::new()
                        .row()
                        .child(Text::new(&project.name).size(11.0).bold().color(INK))
                        .child(
                            Text::new(date_range(&project.start_date, &project.end_date, false))
                                .size(9.0)
                                .color(BLUE)
                                .right(),
                        ),
                );
                if !project.description.trim().is_empty() {
                    body = body.child(Text::new(project.description.trim()).size(10.0).color(MUTED));
                }
                if !project.technologies.is_empty() {
                    body = body.child(
                        Text::new(project.technologies.join(" · ")).size(9.0).color(BLUE),
                    );
                }
                section = section.child(rail_entry(body));
            }
            page = page.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = heading("Skills");
            for (category, members) in grouped_skills(&data.skills) {
                section = section.child(Text::new(category).size(10.5).bold().color(INK));
                for skill in members {
                    section = section.child(progress_row(skill));
                }
            }
            page = page.child(section);
        }

        if has_entries(&data.certificates) {
            let mut section = heading("Certificates");
            for cert in &data.certificates {
                let mut body = Block::new().gap(1.0);
                body = body.child(Text::new(&cert.name).size(10.5).bold().color(INK));
                let mut line = cert.issuer.trim().to_string();
                if !cert.issue_date.trim().is_empty() {
                    if !line.is_empty() {
                        line.push_str(" · ");
                    }
                    line.push_str(cert.issue_date.trim());
                }
                if !line.is_empty() {
                    body = body.child(Text::new(line).size(9.0).color(MUTED));
                }
                section = section.child(rail_entry(body));
            }
            page = page.child(section);
        }

        if has_entries(&data.achievements) {
            let mut section = heading("Achievements");
            for ach in &data.achievements {
                let mut body = Block::new().gap(1.0);
                body = body.child(
                    Block::new()
                        .row()
                        .child(Text::new(&ach.title).size(10.5).bold().color(INK))
                        .child(Text::new(ach.date.trim()).size(9.0).color(BLUE).right()),
                );
                if !ach.description.trim().is_empty() {
                    body = body.child(Text::new(ach.description.trim()).size(9.5).color(MUTED));
                }
                section = section.child(rail_entry(body));
            }
            page = page.child(section);
        }

        if has_entries(&data.hobbies) {
            let mut section = heading("Hobbies");
            for hobby in &data.hobbies {
                let mut label = hobby.name.trim().to_string();
                if let Some(desc) = opt_text(&hobby.description) {
                    label.push_str(&format!(": {desc}"));
                }
                section = section.child(rail_entry(
                    Block::new().child(Text::new(label).size(9.5).color(MUTED)),
                ));
            }
            page = page.child(section);
        }

        VisualDocument::new(page)
    }
}

fn heading(title: &str) -> Block {
    Block::new().gap(7.0).child(
        Block::new()
            .row()
            .gap(8.0)
            .child(Block::new().width(Width::Px(10.0)).min_height(10.0).background(BLUE))
            .child(Text::new(title.to_uppercase()).size(12.0).bold().color(BLUE)),
    )
}

/// One timeline entry: a dot on the rail, content indented beside it.
fn rail_entry(body: Block) -> Node {
    Block::new()
        .row()
        .gap(10.0)
        .margin_bottom(8.0)
        .child(
            Block::new()
                .width(Width::Px(10.0))
                .border_left(Border::new(2.0, RAIL))
                .child(Block::new().width(Width::Px(8.0)).min_height(8.0).background(BLUE)),
        )
        .child(body)
        .into()
}

/// Skill bar: filled fraction of a fixed-width track.
fn progress_row(skill: &Skill) -> Node {
    let track_w = 120.0;
    let filled = track_w * (skill.level.rank() as f32 / 4.0);
    Block::new()
        .row()
        .gap(8.0)
        .margin_bottom(3.0)
        .child(Text::new(&skill.name).size(9.5).color(INK))
        .child(
            Block::new().width(Width::Px(track_w)).background(BAR_BG).child(
                Block::new().width(Width::Px(filled)).min_height(6.0).background(BLUE),
            ),
        )
        .into()
}
