//! Modern - emerald header band with a light sidebar column.

use crate::models::resume::{has_entries, ResumeData, Skill};
use crate::render::{Block, Border, Edges, Node, Rgb, Text, TextStyle, VisualDocument, Width};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, display_name, grouped_skills, link_parts, opt_text, work_dates,
    date_range,
};
use crate::templates::{page_root, TemplateRenderer};

const EMERALD: Rgb = Rgb::new(0x05, 0x96, 0x69);
const EMERALD_LIGHT: Rgb = Rgb::new(0x10, 0xb9, 0x81);
const SIDEBAR_BG: Rgb = Rgb::new(0xf9, 0xfa, 0xfb);
const MUTED: Rgb = Rgb::new(0x4b, 0x55, 0x63);
const DOT_OFF: Rgb = Rgb::new(0xd1, 0xd5, 0xdb);

pub struct ModernTemplate;

impl TemplateRenderer for ModernTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let mut page = page_root();

        page = page.child(header(data));
        page = page.child(
            Block::new()
                .row()
                .child(sidebar(data))
                .child(main_column(data)),
        );

        VisualDocument::new(page)
    }
}

fn header(data: &ResumeData) -> Block {
    let info = &data.personal_info;
    let mut head = Block::new()
        .background(EMERALD)
        .padding(Edges::symmetric(18.0, 24.0))
        .gap(4.0)
        .child(Text::new(display_name(info)).size(22.0).bold().color(Rgb::WHITE));

    if !info.summary.trim().is_empty() {
        head = head.child(
            Text::new(info.summary.trim())
                .size(10.5)
                .color(Rgb::new(0xd1, 0xfa, 0xe5)),
        );
    }
    for part in contact_parts(info) {
        head = head.child(Text::new(part).size(9.5).color(Rgb::WHITE));
    }
    // thin lighter strip stands in for the gradient fade
    head.child(Block::new().min_height(4.0).background(EMERALD_LIGHT))
}

fn sidebar(data: &ResumeData) -> Block {
    let info = &data.personal_info;
    let mut side = Block::new()
        .width(Width::Fraction(1.0 / 3.0))
        .background(SIDEBAR_BG)
        .padding(Edges::all(14.0))
        .gap(14.0);

    let links = link_parts(info);
    if !links.is_empty() {
        let mut block = section_title("Contact");
        for link in links {
            block = block.child(Text::new(link).size(9.0).color(MUTED));
        }
        side = side.child(block);
    }

    if has_entries(&data.skills) {
        let mut block = section_title("Skills");
        for (category, members) in grouped_skills(&data.skills) {
            block = block.child(Text::new(category).size(9.5).bold().color(MUTED));
            for skill in members {
                block = block.child(skill_row(skill));
            }
        }
        side = side.child(block);
    }

    if has_entries(&data.education) {
        let mut block = section_title("Education");
        for edu in &data.education {
            let mut entry = Block::new().gap(1.0).margin_bottom(6.0);
            entry = entry.child(Text::new(&edu.institution).size(10.0).bold());
            let degree = [edu.degree.trim(), edu.field.trim()]
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if !degree.is_empty() {
                entry = entry.child(Text::new(degree).size(9.0).color(MUTED));
            }
            let dates = date_range(&edu.start_date, &edu.end_date, false);
            if !dates.is_empty() {
                entry = entry.child(Text::new(dates).size(8.5).color(MUTED));
            }
            if let Some(gpa) = opt_text(&edu.gpa) {
                entry = entry.child(Text::new(format!("GPA: {gpa}")).size(8.5).color(MUTED));
            }
            block = block.child(entry);
        }
        side = side.child(block);
    }

    if has_entries(&data.hobbies) {
        let mut block = section_title("Hobbies");
        for hobby in &data.hobbies {
            block = block.child(Text::new(&hobby.name).size(9.5).bold());
            if let Some(desc) = opt_text(&hobby.description) {
                block = block.child(Text::new(desc).size(8.5).color(MUTED));
            }
        }
        side = side.child(block);
    }

    side
}

fn main_column(data: &ResumeData) -> Block {
    let mut main = Block::new().padding(Edges::all(16.0)).gap(14.0);
    let body = TextStyle {
        size: 9.5,
        color: MUTED,
        ..Default::default()
    };

    if has_entries(&data.work_experience) {
        let mut block = section_title("Experience");
        for work in &data.work_experience {
            let mut entry = Block::new().gap(2.0).margin_bottom(8.0);
            entry = entry.child(
                Block::new()
                    .row()
                    .child(Text::new(&work.position).size(11.5).bold())
                    .child(Text::new(work_dates(work)).size(9.0).color(MUTED).right()),
            );
            let mut line = work.company.trim().to_string();
            if !work.location.trim().is_empty() {
                if !line.is_empty() {
                    line.push_str(" · ");
                }
                line.push_str(work.location.trim());
            }
            if !line.is_empty() {
                entry = entry.child(Text::new(line).size(10.0).color(EMERALD).bold());
            }
            entry = entry.children(bullet_nodes(&work.description, &body, "• "));
            block = block.child(entry);
        }
        main = main.child(block);
    }

    if has_entries(&data.projects) {
        let mut block = section_title("Projects");
        for project in &data.projects {
            let mut entry = Block::new().gap(2.0).margin_bottom(8.0);
            entry = entry.child(
                Block::new()
                    .row()
                    .child(Text::new(&project.name).size(11.0).bold())
                    .child(
                        Text::new(date_range(&project.start_date, &project.end_date, false))
                            .size(9.0)
                            .color(MUTED)
                            .right(),
                    ),
            );
            if !project.description.trim().is_empty() {
                let mut text = Text::new(project.description.trim());
                text.style = body.clone();
                entry = entry.child(text);
            }
            if !project.technologies.is_empty() {
                entry = entry.child(
                    Text::new(project.technologies.join(" · "))
                        .size(8.5)
                        .color(EMERALD),
                );
            }
            for link in [opt_text(&project.link), opt_text(&project.github)].into_iter().flatten() {
                entry = entry.child(Text::new(link).size(8.5).color(MUTED));
            }
            block = block.child(entry);
        }
        main = main.child(block);
    }

    if has_entries(&data.certificates) {
        let mut block = section_title("Certificates");
        for cert in &data.certificates {
            let mut entry = Block::new().gap(1.0).margin_bottom(6.0);
            entry = entry.child(Text::new(&cert.name).size(10.5).bold());
            let mut line = cert.issuer.trim().to_string();
            let dates = date_range(&cert.issue_date, cert.expiry_date.as_deref().unwrap_or(""), false);
            if !dates.is_empty() {
                if !line.is_empty() {
                    line.push_str(" · ");
                }
                line.push_str(&dates);
            }
            if !line.is_empty() {
                entry = entry.child(Text::new(line).size(9.0).color(MUTED));
            }
            if let Some(id) = opt_text(&cert.credential_id) {
                entry = entry.child(Text::new(format!("Credential: {id}")).size(8.5).color(MUTED));
            }
            block = block.child(entry);
        }
        main = main.child(block);
    }

    if has_entries(&data.achievements) {
        let mut block = section_title("Achievements");
        for ach in &data.achievements {
            let mut entry = Block::new().gap(1.0).margin_bottom(6.0);
            entry = entry.child(
                Block::new()
                    .row()
                    .child(Text::new(&ach.title).size(10.5).bold())
                    .child(Text::new(ach.date.trim()).size(9.0).color(MUTED).right()),
            );
            if !ach.description.trim().is_empty() {
                let mut text = Text::new(ach.description.trim());
                text.style = body.clone();
                entry = entry.child(text);
            }
            if let Some(org) = opt_text(&ach.organization) {
                entry = entry.child(Text::new(org).size(8.5).color(EMERALD));
            }
            block = block.child(entry);
        }
        main = main.child(block);
    }

    main
}

fn section_title(title: &str) -> Block {
    Block::new().gap(4.0).child(
        Block::new()
            .border_bottom(Border::new(1.0, Rgb::new(0xa7, 0xf3, 0xd0)))
            .child(Text::new(title).size(12.0).bold().color(EMERALD)),
    )
}

fn skill_row(skill: &Skill) -> Node {
    let mut dots = Block::new().row().gap(2.0);
    for i in 1..=4 {
        let color = if i <= skill.level.rank() { EMERALD_LIGHT } else { DOT_OFF };
        dots = dots.child(Block::new().width(Width::Px(6.0)).min_height(6.0).background(color));
    }
    Block::new()
        .row()
        .child(Text::new(&skill.name).size(9.0))
        .child(Block::new().width(Width::Px(30.0)).child(dots))
        .into()
}
