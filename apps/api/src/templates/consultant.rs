//! Consultant - two-tone header band, competency matrix for skills.

use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument, Width};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const SKY: Rgb = Rgb::new(0x0e, 0xa5, 0xe9);
const DEEP: Rgb = Rgb::new(0x02, 0x84, 0xc7);
const INK: Rgb = Rgb::new(0x0f, 0x17, 0x2a);
const MUTED: Rgb = Rgb::new(0x47, 0x55, 0x69);
const RULE: Rgb = Rgb::new(0xba, 0xe6, 0xfd);

pub struct ConsultantTemplate;

impl TemplateRenderer for ConsultantTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root();

        // two-tone band stands in for the gradient accent
        let mut head = Block::new().row();
        let mut left = Block::new()
            .width(Width::Fraction(0.62))
            .background(DEEP)
            .padding(Edges::symmetric(20.0, 26.0))
            .gap(4.0)
            .child(Text::new(display_name(info)).size(23.0).bold().color(Rgb::WHITE));
        if !info.summary.trim().is_empty() {
            left = left.child(
                Text::new(info.summary.trim()).size(9.5).color(Rgb::new(0xe0, 0xf2, 0xfe)),
            );
        }
        head = head.child(left);

        let mut right = Block::new()
            .background(SKY)
            .padding(Edges::symmetric(20.0, 18.0))
            .gap(2.0);
        for part in contact_parts(info).into_iter().chain(link_parts(info)) {
            right = right.child(Text::new(part).size(8.5).color(Rgb::WHITE).right());
        }
        head = head.child(right);
        page = page.child(head);

        let mut body = Block::new().padding(Edges::symmetric(20.0, 26.0)).gap(15.0);
        let bullet_style = TextStyle {
            size: 10.0,
            color: MUTED,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = underlined("Engagement History");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&work.position).size(12.0).bold().color(INK))
                        .child(Text::new(work_dates(work)).size(9.5).bold().color(DEEP).right()),
                );
                let client = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" · ");
                if !client.is_empty() {
                    entry = entry.child(Text::new(client).size(10.5).color(SKY).bold());
                }
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "› "));
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = underlined("Competencies");
            for (category, members) in grouped_skills(&data.skills) {
                let mut row = Block::new().row().gap(8.0).margin_bottom(3.0);
                row = row.child(
                    Block::new()
                        .width(Width::Px(160.0))
                        .child(Text::new(category).size(10.0).bold().color(DEEP)),
                );
                let listed = members
                    .iter()
                    .map(|s| format!("{} ({})", s.name, s.level.label()))
                    .collect::<Vec<_>>()
                    .join(", ");
                row = row.child(Text::new(listed).size(10.0).color(MUTED));
                section = section.child(row);
            }
            body = body.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = underlined("Engagements & Projects");
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(8.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(Text::new(&project.name).size(11.0).bold().color(INK))
                        .child(
                            Text::new(date_range(&project.start_date, &project.end_date, false))
                                .size(9.0)
                                .color(DEEP)
                                .right(),
                        ),
                );
                if !project.description.trim().is_empty() {
                    entry = entry.child(Text::new(project.description.trim()).size(10.0).color(MUTED));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        Text::new(project.technologies.join(" · ")).size(9.0).color(SKY),
                    );
                }
                for link in [opt_text(&project.link), opt_text(&project.github)].into_iter().flatten()
                {
                    entry = entry.child(Text::new(link).size(8.5).color(MUTED));
                }
                section = section.child(entry);
            }
            body = body.child(section);
        }

        let mut col_a = Block::new().gap(12.0);
        let mut col_b = Block::new().gap(12.0);
        let mut used = false;

        if has_entries(&data.education) {
            let mut section = underlined("Education");
            for edu in &data.education {
                section = section.child(Text::new(&edu.institution).size(10.5).bold().color(INK));
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ");
                if !degree.is_empty() {
                    section = section.child(Text::new(degree).size(9.5).color(MUTED));
                }
                let dates = date_range(&edu.start_date, &edu.end_date, false);
                if !dates.is_empty() {
                    section = section.child(Text::new(dates).size(9.0).color(DEEP));
                }
            }
            col_a = col_a.child(section);
            used = true;
        }

        if has_entries(&data.certificates) {
            let mut section = underlined("Accreditations");
            for cert in &data.certificates {
                section = section.child(Text::new(&cert.name).size(10.0).bold().color(INK));
                let mut line = cert.issuer.trim().to_string();
                if !cert.issue_date.trim().is_empty() {
                    if !line.is_empty() {
                        line.push_str(" · ");
                    }
                    line.push_str(cert.issue_date.trim());
                }
                if !line.is_empty() {
                    section = section.child(Text::new(line).size(9.0).color(MUTED));
                }
            }
            col_b = col_b.child(section);
            used = true;
        }

        if has_entries(&data.achievements) {
            let mut section = underlined("Achievements");
            for ach in &data.achievements {
                section = section.child(Text::new(&ach.title).size(10.0).bold().color(INK));
                if !ach.description.trim().is_empty() {
                    section = section.child(Text::new(ach.description.trim()).size(9.0).color(MUTED));
                }
            }
            col_a = col_a.child(section);
            used = true;
        }

        if has_entries(&data.hobbies) {
            let names = data
                .hobbies
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join(" · ");
            col_b = col_b.child(underlined("Hobbies").child(Text::new(names).size(9.5).color(MUTED)));
            used = true;
        }

        if used {
            body = body.child(Block::new().row().gap(20.0).child(col_a).child(col_b));
        }

        VisualDocument::new(page.child(body))
    }
}

fn underlined(title: &str) -> Block {
    Block::new().gap(5.0).child(
        Block::new()
            .border_bottom(Border::new(2.0, RULE))
            .child(Text::new(title).size(12.0).bold().color(DEEP)),
    )
}
