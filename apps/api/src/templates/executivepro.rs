//! Executive Pro - near-black header with a brass accent, two-column body.

use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument, Width};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const CHARCOAL: Rgb = Rgb::new(0x0f, 0x17, 0x2a);
const BRASS: Rgb = Rgb::new(0xb4, 0x53, 0x09);
const INK: Rgb = Rgb::new(0x1e, 0x29, 0x3b);
const MUTED: Rgb = Rgb::new(0x47, 0x55, 0x69);
const PALE: Rgb = Rgb::new(0xf8, 0xfa, 0xfc);

pub struct ExecutiveProTemplate;

impl TemplateRenderer for ExecutiveProTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root();

        let mut head = Block::new()
            .background(CHARCOAL)
            .padding(Edges::symmetric(24.0, 30.0))
            .gap(5.0)
            .child(
                Text::new(display_name(info).to_uppercase())
                    .size(26.0)
                    .bold()
                    .color(Rgb::WHITE),
            )
            .child(Block::new().width(Width::Px(60.0)).min_height(3.0).background(BRASS));
        if !info.summary.trim().is_empty() {
            head = head.child(
                Text::new(info.summary.trim()).size(10.0).color(Rgb::new(0xcb, 0xd5, 0xe1)),
            );
        }
        let reach = contact_parts(info)
            .into_iter()
            .chain(link_parts(info))
            .collect::<Vec<_>>()
            .join("   ·   ");
        if !reach.is_empty() {
            head = head.child(Text::new(reach).size(8.5).color(Rgb::new(0x94, 0xa3, 0xb8)));
        }
        page = page.child(head);

        let bullet_style = TextStyle {
            size: 10.0,
            color: MUTED,
            ..Default::default()
        };

        let mut wide = Block::new().gap(14.0);

        if has_entries(&data.work_experience) {
            let mut section = brass_heading("Leadership Experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&work.position).size(12.0).bold().color(CHARCOAL))
                        .child(Text::new(work_dates(work)).size(9.5).bold().color(BRASS).right()),
                );
                let employer = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("  ·  ");
                if !employer.is_empty() {
                    entry = entry.child(Text::new(employer).size(10.5).color(INK));
                }
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "▪ "));
                section = section.child(entry);
            }
            wide = wide.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = brass_heading("Key Initiatives");
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(8.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&project.name).size(11.0).bold().color(CHARCOAL))
                        .child(
                            Text::new(date_range(&project.start_date, &project.end_date, false))
                                .size(9.0)
                                .color(BRASS)
                                .right(),
                        ),
                );
                if !project.description.trim().is_empty() {
                    entry = entry.child(Text::new(project.description.trim()).size(10.0).color(MUTED));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        Text::new(project.technologies.join("  ·  ")).size(9.0).color(BRASS),
                    );
                }
                section = section.child(entry);
            }
            wide = wide.child(section);
        }

        let mut narrow = Block::new()
            .width(Width::Fraction(0.34))
            .background(PALE)
            .padding(Edges::all(14.0))
            .gap(13.0);

        if has_entries(&data.skills) {
            let mut block = brass_heading("Expertise");
            for (category, members) in grouped_skills(&data.skills) {
                block = block.child(Text::new(category).size(9.5).bold().color(CHARCOAL));
                for skill in members {
                    block = block.child(
                        Block::new()
                            .row()
                            .child(Text::new(&skill.name).size(9.0).color(INK))
                            .child(Text::new(skill.level.label()).size(8.0).color(BRASS).right()),
                    );
                }
            }
            narrow = narrow.child(block);
        }

        if has_entries(&data.education) {
            let mut block = brass_heading("Education");
            for edu in &data.education {
                block = block.child(Text::new(&edu.institution).size(10.0).bold().color(CHARCOAL));
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if !degree.is_empty() {
                    block = block.child(Text::new(degree).size(9.0).color(MUTED));
                }
                let dates = date_range(&edu.start_date, &edu.end_date, false);
                if !dates.is_empty() {
                    block = block.child(Text::new(dates).size(8.5).color(BRASS));
                }
            }
            narrow = narrow.child(block);
        }

        if has_entries(&data.certificates) {
            let mut block = brass_heading("Credentials");
            for cert in &data.certificates {
                block = block.child(Text::new(&cert.name).size(9.5).bold().color(CHARCOAL));
                let mut line = cert.issuer.trim().to_string();
                if !cert.issue_date.trim().is_empty() {
                    if !line.is_empty() {
                        line.push_str(", ");
                    }
                    line.push_str(cert.issue_date.trim());
                }
                if !line.is_empty() {
                    block = block.child(Text::new(line).size(8.5).color(MUTED));
                }
            }
            narrow = narrow.child(block);
        }

        if has_entries(&data.achievements) {
            let mut block = brass_heading("Achievements");
            for ach in &data.achievements {
                block = block.child(Text::new(&ach.title).size(9.5).bold().color(CHARCOAL));
                if !ach.description.trim().is_empty() {
                    block = block.child(Text::new(ach.description.trim()).size(8.5).color(MUTED));
                }
            }
            narrow = narrow.child(block);
        }

        if has_entries(&data.hobbies) {
            let names = data
                .hobbies
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join("  ·  ");
            narrow = narrow.child(brass_heading("Beyond Work").child(Text::new(names).size(9.0).color(INK)));
        }

        page = page.child(
            Block::new()
                .row()
                .child(wide.padding(Edges::all(22.0)))
                .child(narrow),
        );

        VisualDocument::new(page)
    }
}

fn brass_heading(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .border_bottom(Border::new(2.0, BRASS))
            .child(Text::new(title.to_uppercase()).size(11.0).bold().color(CHARCOAL)),
    )
}
