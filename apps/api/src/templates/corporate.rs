//! Corporate - main column with a structured dark sidebar on the right.

use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument, Width};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const SLATE: Rgb = Rgb::new(0x1f, 0x29, 0x37);
const ACCENT: Rgb = Rgb::new(0x0f, 0x76, 0x6e);
const INK: Rgb = Rgb::new(0x33, 0x41, 0x55);
const SIDE_TEXT: Rgb = Rgb::new(0xe2, 0xe8, 0xf0);
const SIDE_DIM: Rgb = Rgb::new(0x94, 0xa3, 0xb8);

pub struct CorporateTemplate;

impl TemplateRenderer for CorporateTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let page = page_root().row();
        let doc = page.child(main_column(data)).child(sidebar(data));
        VisualDocument::new(doc)
    }
}

fn main_column(data: &ResumeData) -> Block {
    let info = &data.personal_info;
    let mut main = Block::new().padding(Edges::all(24.0)).gap(14.0);

    let mut masthead = Block::new().gap(3.0).child(
        Text::new(display_name(info)).size(24.0).bold().color(SLATE),
    );
    if !info.summary.trim().is_empty() {
        masthead = masthead.child(Text::new(info.summary.trim()).size(10.0).color(INK));
    }
    main = main.child(masthead.border_bottom(Border::new(3.0, ACCENT)).padding(Edges {
        bottom: 10.0,
        ..Default::default()
    }));

    let bullet_style = TextStyle {
        size: 10.0,
        color: INK,
        ..Default::default()
    };

    if has_entries(&data.work_experience) {
        let mut section = block_heading("Experience");
        for work in &data.work_experience {
            let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
            entry = entry.child(
                Block::new()
                    .row()
                    .child(Text::new(&work.position).size(12.0).bold().color(SLATE))
                    .child(Text::new(work_dates(work)).size(9.5).color(ACCENT).right()),
            );
            let employer = [work.company.trim(), work.location.trim()]
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            if !employer.is_empty() {
                entry = entry.child(Text::new(employer).size(10.5).bold().color(INK));
            }
            entry = entry.children(bullet_nodes(&work.description, &bullet_style, "• "));
            section = section.child(entry);
        }
        main = main.child(section);
    }

    if has_entries(&data.projects) {
        let mut section = block_heading("Projects");
        for project in &data.projects {
            let mut entry = Block::new().gap(2.0).margin_bottom(8.0);
            entry = entry.child(
                Block::new()
                    .row()
                    .child(Text::new(&project.name).size(11.5).bold().color(SLATE))
                    .child(
                        Text::new(date_range(&project.start_date, &project.end_date, false))
                            .size(9.0)
                            .color(ACCENT)
                            .right(),
                    ),
            );
            if !project.description.trim().is_empty() {
                entry = entry.child(Text::new(project.description.trim()).size(10.0).color(INK));
            }
            if !project.technologies.is_empty() {
                entry = entry.child(
                    Text::new(project.technologies.join(" / ")).size(9.0).color(ACCENT),
                );
            }
            section = section.child(entry);
        }
        main = main.child(section);
    }

    if has_entries(&data.education) {
        let mut section = block_heading("Education");
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
                    .child(Text::new(&edu.institution).size(11.0).bold().color(SLATE))
                    .child(
                        Text::new(date_range(&edu.start_date, &edu.end_date, false))
                            .size(9.5)
                            .color(ACCENT)
                            .right(),
                    ),
            );
            if !degree.is_empty() {
                entry = entry.child(Text::new(degree).size(10.0).color(INK));
            }
            if let Some(desc) = opt_text(&edu.description) {
                entry = entry.child(Text::new(desc).size(9.5).color(INK));
            }
            section = section.child(entry);
        }
        main = main.child(section);
    }

    if has_entries(&data.achievements) {
        let mut section = block_heading("Achievements");
        for ach in &data.achievements {
            let mut entry = Block::new().gap(1.0).margin_bottom(6.0);
            entry = entry.child(
                Block::new()
                    .row()
                    .child(Text::new(&ach.title).size(10.5).bold().color(SLATE))
                    .child(Text::new(ach.date.trim()).size(9.5).color(ACCENT).right()),
            );
            if !ach.description.trim().is_empty() {
                entry = entry.child(Text::new(ach.description.trim()).size(10.0).color(INK));
            }
            section = section.child(entry);
        }
        main = main.child(section);
    }

    main
}

fn sidebar(data: &ResumeData) -> Block {
    let info = &data.personal_info;
    let mut side = Block::new()
        .width(Width::Fraction(0.32))
        .background(SLATE)
        .padding(Edges::all(16.0))
        .gap(14.0);

    let contact: Vec<String> = contact_parts(info).into_iter().chain(link_parts(info)).collect();
    if !contact.is_empty() {
        let mut block = side_heading("Contact");
        for part in contact {
            block = block.child(Text::new(part).size(8.5).color(SIDE_TEXT));
        }
        side = side.child(block);
    }

    if has_entries(&data.skills) {
        let mut block = side_heading("Skills");
        for (category, members) in grouped_skills(&data.skills) {
            block = block.child(Text::new(category).size(9.5).bold().color(SIDE_DIM));
            for skill in members {
                block = block.child(
                    Block::new()
                        .row()
                        .child(Text::new(&skill.name).size(9.0).color(SIDE_TEXT))
                        .child(
                            Text::new(skill.level.label()).size(8.0).color(SIDE_DIM).right(),
                        ),
                );
            }
        }
        side = side.child(block);
    }

    if has_entries(&data.certificates) {
        let mut block = side_heading("Certificates");
        for cert in &data.certificates {
            block = block.child(Text::new(&cert.name).size(9.0).bold().color(SIDE_TEXT));
            if !cert.issuer.trim().is_empty() {
                block = block.child(Text::new(cert.issuer.trim()).size(8.5).color(SIDE_DIM));
            }
        }
        side = side.child(block);
    }

    if has_entries(&data.hobbies) {
        let mut block = side_heading("Hobbies");
        for hobby in &data.hobbies {
            block = block.child(Text::new(&hobby.name).size(9.0).color(SIDE_TEXT));
        }
        side = side.child(block);
    }

    side
}

fn block_heading(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .background(Rgb::new(0xf1, 0xf5, 0xf9))
            .padding(Edges::symmetric(4.0, 8.0))
            .child(Text::new(title.to_uppercase()).size(11.0).bold().color(ACCENT)),
    )
}

fn side_heading(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .border_bottom(Border::new(1.0, Rgb::new(0x47, 0x55, 0x69)))
            .child(Text::new(title.to_uppercase()).size(10.0).bold().color(SIDE_TEXT)),
    )
}
