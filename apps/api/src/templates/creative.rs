//! Creative - violet header, pink accent bars, technology chips.

use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Edges, Node, Rgb, Text, TextStyle, VisualDocument, Width};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const VIOLET: Rgb = Rgb::new(0x7c, 0x3a, 0xed);
const PINK: Rgb = Rgb::new(0xec, 0x48, 0x99);
const INK: Rgb = Rgb::new(0x37, 0x41, 0x51);
const CHIP_BG: Rgb = Rgb::new(0xf3, 0xe8, 0xff);

pub struct CreativeTemplate;

impl TemplateRenderer for CreativeTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root();

        let mut hero = Block::new()
            .background(VIOLET)
            .padding(Edges::symmetric(22.0, 26.0))
            .gap(5.0)
            .child(Text::new(display_name(info)).size(24.0).bold().color(Rgb::WHITE));
        if !info.summary.trim().is_empty() {
            hero = hero.child(
                Text::new(info.summary.trim()).size(10.0).color(Rgb::new(0xed, 0xe9, 0xfe)),
            );
        }
        let reach = contact_parts(info)
            .into_iter()
            .chain(link_parts(info))
            .collect::<Vec<_>>()
            .join("  •  ");
        if !reach.is_empty() {
            hero = hero.child(Text::new(reach).size(8.5).color(Rgb::WHITE));
        }
        page = page
            .child(hero)
            .child(Block::new().min_height(5.0).background(PINK));

        let mut body = Block::new().padding(Edges::all(22.0)).gap(15.0);
        let bullet_style = TextStyle {
            size: 10.0,
            color: INK,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = accent_section("Experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&work.position).size(12.0).bold().color(VIOLET))
                        .child(Text::new(work_dates(work)).size(9.0).color(PINK).bold().right()),
                );
                let place = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" • ");
                if !place.is_empty() {
                    entry = entry.child(Text::new(place).size(10.0).bold().color(INK));
                }
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "✦ "));
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = accent_section("Projects");
            for project in &data.projects {
                let mut entry = Block::new().gap(3.0).margin_bottom(9.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&project.name).size(11.5).bold().color(VIOLET))
                        .child(
                            Text::new(date_range(&project.start_date, &project.end_date, false))
                                .size(9.0)
                                .color(PINK)
                                .right(),
                        ),
                );
                if !project.description.trim().is_empty() {
                    entry = entry.child(Text::new(project.description.trim()).size(10.0).color(INK));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(chip_row(&project.technologies));
                }
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = accent_section("Skills");
            for (category, members) in grouped_skills(&data.skills) {
                section = section.child(Text::new(category).size(10.5).bold().color(PINK));
                let names: Vec<String> = members.iter().map(|s| s.name.clone()).collect();
                section = section.child(chip_row(&names));
            }
            body = body.child(section);
        }

        let split = Block::new().row().gap(18.0);
        let mut left = Block::new().gap(12.0);
        let mut right = Block::new().gap(12.0);
        let mut used_split = false;

        if has_entries(&data.education) {
            let mut section = accent_section("Education");
            for edu in &data.education {
                let mut entry = Block::new().gap(1.0).margin_bottom(6.0);
                entry = entry.child(Text::new(&edu.institution).size(10.5).bold().color(VIOLET));
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if !degree.is_empty() {
                    entry = entry.child(Text::new(degree).size(9.5).color(INK));
                }
                let dates = date_range(&edu.start_date, &edu.end_date, false);
                if !dates.is_empty() {
                    entry = entry.child(Text::new(dates).size(8.5).color(PINK));
                }
                section = section.child(entry);
            }
            left = left.child(section);
            used_split = true;
        }

        if has_entries(&data.certificates) {
            let mut section = accent_section("Certificates");
            for cert in &data.certificates {
                let mut entry = Block::new().gap(1.0).margin_bottom(5.0);
                entry = entry.child(Text::new(&cert.name).size(10.0).bold().color(VIOLET));
                if !cert.issuer.trim().is_empty() {
                    entry = entry.child(Text::new(cert.issuer.trim()).size(9.0).color(INK));
                }
                section = section.child(entry);
            }
            right = right.child(section);
            used_split = true;
        }

        if has_entries(&data.achievements) {
            let mut section = accent_section("Achievements");
            for ach in &data.achievements {
                let mut entry = Block::new().gap(1.0).margin_bottom(5.0);
                entry = entry.child(Text::new(&ach.title).size(10.0).bold().color(VIOLET));
                if !ach.description.trim().is_empty() {
                    entry = entry.child(Text::new(ach.description.trim()).size(9.0).color(INK));
                }
                if !ach.date.trim().is_empty() {
                    entry = entry.child(Text::new(ach.date.trim()).size(8.5).color(PINK));
                }
                section = section.child(entry);
            }
            left = left.child(section);
            used_split = true;
        }

        if has_entries(&data.hobbies) {
            let mut section = accent_section("Hobbies");
            for hobby in &data.hobbies {
                let mut label = hobby.name.trim().to_string();
                if let Some(desc) = opt_text(&hobby.description) {
                    label.push_str(&format!(": {desc}"));
                }
                section = section.child(Text::new(label).size(9.5).color(INK));
            }
            right = right.child(section);
            used_split = true;
        }

        if used_split {
            body = body.child(split.child(left).child(right));
        }

        VisualDocument::new(page.child(body))
    }
}

fn accent_section(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .row()
            .gap(6.0)
            .child(Block::new().width(Width::Px(14.0)).min_height(14.0).background(PINK))
            .child(Text::new(title).size(12.5).bold().color(VIOLET)),
    )
}

fn chip_row(items: &[String]) -> Node {
    let mut row = Block::new().row().gap(5.0);
    for item in items {
        row = row.child(
            Block::new()
                .background(CHIP_BG)
                .padding(Edges::symmetric(2.0, 7.0))
                .child(Text::new(item).size(8.5).color(VIOLET)),
        );
    }
    row.into()
}
