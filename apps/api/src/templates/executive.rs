//! Executive - black and white, heavy top rule, uppercase headline.

use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
const GRAY: Rgb = Rgb::new(0x52, 0x52, 0x52);
const HAIR: Rgb = Rgb::new(0xa3, 0xa3, 0xa3);

pub struct ExecutiveTemplate;

impl TemplateRenderer for ExecutiveTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root()
            .border_top(Border::new(6.0, BLACK))
            .padding(Edges::symmetric(30.0, 40.0))
            .gap(16.0);

        let mut masthead = Block::new()
            .gap(4.0)
            .border_bottom(Border::new(2.0, BLACK))
            .padding(Edges {
                bottom: 12.0,
                ..Default::default()
            })
            .child(
                Text::new(display_name(info).to_uppercase())
                    .size(28.0)
                    .bold()
                    .color(BLACK),
            );
        let reach = contact_parts(info)
            .into_iter()
            .chain(link_parts(info))
            .collect::<Vec<_>>()
            .join("   |   ");
        if !reach.is_empty() {
            masthead = masthead.child(Text::new(reach).size(9.0).color(GRAY));
        }
        if !info.summary.trim().is_empty() {
            masthead = masthead.child(Text::new(info.summary.trim()).size(10.5).color(BLACK));
        }
        page = page.child(masthead);

        let bullets = TextStyle {
            size: 10.0,
            color: GRAY,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = ruled("Experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(10.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(
                            Text::new(work.position.to_uppercase()).size(12.0).bold().color(BLACK),
                        )
                        .child(Text::new(work_dates(work)).size(9.5).color(GRAY).right()),
                );
                let employer = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if !employer.is_empty() {
                    entry = entry.child(Text::new(employer).size(10.5).italic().color(GRAY));
                }
                entry = entry.children(bullet_nodes(&work.description, &bullets, "— "));
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.education) {
            let mut section = ruled("Education");
            for edu in &data.education {
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0).child(
                    Block::new()
                        .row()
                        .child(Text::new(&edu.institution).size(11.0).bold().color(BLACK))
                        .child(
                            Text::new(date_range(&edu.start_date, &edu.end_date, false))
                                .size(9.5)
                                .color(GRAY)
                                .right(),
                        ),
                );
                if !degree.is_empty() {
                    entry = entry.child(Text::new(degree).size(10.0).color(GRAY));
                }
                if let Some(gpa) = opt_text(&edu.gpa) {
                    entry = entry.child(Text::new(format!("GPA {gpa}")).size(9.5).color(GRAY));
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = ruled("Expertise");
            for (category, members) in grouped_skills(&data.skills) {
                let names = members
                    .iter()
                    .map(|s| s.name.as_str())
                    .collect::<Vec<_>>()
                    .join("  ·  ");
                section = section.child(
                    Text::new(format!("{}   {names}", category.to_uppercase()))
                        .size(10.0)
                        .color(BLACK),
                );
            }
            page = page.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = ruled("Projects");
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(Text::new(&project.name).size(11.0).bold().color(BLACK));
                if !project.description.trim().is_empty() {
                    entry = entry.child(Text::new(project.description.trim()).size(10.0).color(GRAY));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        Text::new(project.technologies.join(" · ")).size(9.0).italic().color(GRAY),
                    );
                }
                section = section.child(entry);
            }
            page = page.child(section);
        }

        if has_entries(&data.certificates) {
            let mut section = ruled("Certifications");
            for cert in &data.certificates {
                let mut line = cert.name.trim().to_string();
                if !cert.issuer.trim().is_empty() {
                    line.push_str(&format!(", {}", cert.issuer.trim()));
                }
                if !cert.issue_date.trim().is_empty() {
                    line.push_str(&format!(" ({})", cert.issue_date.trim()));
                }
                section = section.child(Text::new(line).size(10.0).color(GRAY));
            }
            page = page.child(section);
        }

        if has_entries(&data.achievements) {
            let mut section = ruled("Achievements");
            for ach in &data.achievements {
                let mut entry = Block::new().gap(1.0).margin_bottom(5.0).child(
                    Block::new()
                        .row()
                        .child(Text::new(&ach.title).size(10.5).bold().color(BLACK))
                        .child(Text::new(ach.date.trim()).size(9.5).color(GRAY).right()),
                );
                if !ach.description.trim().is_empty() {
                    entry = entry.child(Text::new(ach.description.trim()).size(10.0).color(GRAY));
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
                .join("   |   ");
            page = page.child(ruled("Hobbies").child(Text::new(names).size(10.0).color(GRAY)));
        }

        VisualDocument::new(page)
    }
}

fn ruled(title: &str) -> Block {
    Block::new().gap(6.0).child(
        Block::new()
            .border_bottom(Border::new(1.0, HAIR))
            .child(Text::new(title.to_uppercase()).size(11.0).bold().color(BLACK)),
    )
}
