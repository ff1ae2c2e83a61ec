//! Professional - navy banner, corporate single-column formatting.

use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument, Width};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const NAVY: Rgb = Rgb::new(0x1e, 0x3a, 0x5f);
const STEEL: Rgb = Rgb::new(0x47, 0x55, 0x69);
const RULE: Rgb = Rgb::new(0xcb, 0xd5, 0xe1);

pub struct ProfessionalTemplate;

impl TemplateRenderer for ProfessionalTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root();

        let mut banner = Block::new()
            .background(NAVY)
            .padding(Edges::symmetric(20.0, 28.0))
            .row()
            .gap(12.0);
        let mut identity = Block::new().gap(3.0).child(
            Text::new(display_name(info)).size(24.0).bold().color(Rgb::WHITE),
        );
        if !info.summary.trim().is_empty() {
            identity = identity.child(
                Text::new(info.summary.trim()).size(9.5).color(Rgb::new(0xcb, 0xd5, 0xe1)),
            );
        }
        banner = banner.child(identity);

        let reachables: Vec<String> = contact_parts(info)
            .into_iter()
            .chain(link_parts(info))
            .collect();
        if !reachables.is_empty() {
            let mut contact = Block::new().width(Width::Px(200.0)).gap(2.0);
            for part in reachables {
                contact = contact.child(Text::new(part).size(8.5).color(Rgb::WHITE).right());
            }
            banner = banner.child(contact);
        }
        page = page.child(banner);

        let mut body = Block::new().padding(Edges::symmetric(22.0, 28.0)).gap(15.0);
        let bullet_style = TextStyle {
            size: 10.0,
            color: STEEL,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = titled("Professional Experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&work.position).size(12.0).bold().color(NAVY))
                        .child(Text::new(work_dates(work)).size(9.5).color(STEEL).right()),
                );
                let employer = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" | ");
                if !employer.is_empty() {
                    entry = entry.child(Text::new(employer).size(10.5).bold());
                }
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "• "));
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.education) {
            let mut section = titled("Education");
            for edu in &data.education {
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(
                            Text::new(if degree.is_empty() {
                                edu.institution.trim().to_string()
                            } else {
                                degree
                            })
                            .size(11.0)
                            .bold()
                            .color(NAVY),
                        )
                        .child(
                            Text::new(date_range(&edu.start_date, &edu.end_date, false))
                                .size(9.5)
                                .color(STEEL)
                                .right(),
                        ),
                );
                entry = entry.child(Text::new(&edu.institution).size(10.0).color(STEEL));
                if let Some(gpa) = opt_text(&edu.gpa) {
                    entry = entry.child(Text::new(format!("GPA: {gpa}")).size(9.5).color(STEEL));
                }
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = titled("Core Skills");
            for (category, members) in grouped_skills(&data.skills) {
                let listed = members
                    .iter()
                    .map(|s| format!("{} ({})", s.name, s.level.label()))
                    .collect::<Vec<_>>()
                    .join(", ");
                section = section.child(
                    Block::new()
                        .row()
                        .gap(6.0)
                        .child(
                            Block::new()
                                .width(Width::Px(150.0))
                                .child(Text::new(category).size(10.0).bold().color(NAVY)),
                        )
                        .child(Text::new(listed).size(10.0).color(STEEL)),
                );
            }
            body = body.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = titled("Selected Projects");
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(Text::new(&project.name).size(11.0).bold().color(NAVY));
                if !project.description.trim().is_empty() {
                    entry = entry.child(Text::new(project.description.trim()).size(10.0).color(STEEL));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        Text::new(format!("Technologies: {}", project.technologies.join(", ")))
                            .size(9.0)
                            .color(STEEL),
                    );
                }
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.certificates) {
            let mut section = titled("Certifications");
            for cert in &data.certificates {
                let mut entry = Block::new().row().margin_bottom(3.0);
                let mut label = cert.name.trim().to_string();
                if !cert.issuer.trim().is_empty() {
                    label.push_str(&format!(" | {}", cert.issuer.trim()));
                }
                entry = entry.child(Text::new(label).size(10.0).color(STEEL));
                if !cert.issue_date.trim().is_empty() {
                    entry = entry.child(
                        Text::new(cert.issue_date.trim()).size(9.5).color(STEEL).right(),
                    );
                }
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.achievements) {
            let mut section = titled("Achievements");
            for ach in &data.achievements {
                let mut entry = Block::new().gap(1.0).margin_bottom(5.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&ach.title).size(10.5).bold().color(NAVY))
                        .child(Text::new(ach.date.trim()).size(9.5).color(STEEL).right()),
                );
                if !ach.description.trim().is_empty() {
                    entry = entry.child(Text::new(ach.description.trim()).size(10.0).color(STEEL));
                }
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.hobbies) {
            let names = data
                .hobbies
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            body = body.child(titled("Hobbies").child(Text::new(names).size(10.0).color(STEEL)));
        }

        VisualDocument::new(page.child(body))
    }
}

fn titled(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .border_bottom(Border::new(2.0, RULE))
            .border_left(Border::new(4.0, NAVY))
            .padding(Edges {
                left: 8.0,
                bottom: 2.0,
                ..Default::default()
            })
            .child(Text::new(title.to_uppercase()).size(11.5).bold().color(NAVY)),
    )
}
