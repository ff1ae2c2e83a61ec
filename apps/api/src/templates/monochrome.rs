//! Monochrome - monospace, terminal-inspired, dark header.

use crate::layout::FontFamily;
use crate::models::resume::{has_entries, ResumeData};
use crate::render::{Block, Border, Edges, Rgb, Text, TextStyle, VisualDocument};
use crate::templates::helpers::{
    bullet_nodes, contact_parts, date_range, display_name, grouped_skills, link_parts, opt_text,
    work_dates,
};
use crate::templates::{page_root, TemplateRenderer};

const DARK: Rgb = Rgb::new(0x11, 0x18, 0x27);
const INK: Rgb = Rgb::new(0x1f, 0x29, 0x37);
const DIM: Rgb = Rgb::new(0x6b, 0x72, 0x80);
const RULE: Rgb = Rgb::new(0x37, 0x41, 0x51);

pub struct MonochromeTemplate;

impl TemplateRenderer for MonochromeTemplate {
    fn render(&self, data: &ResumeData) -> VisualDocument {
        let info = &data.personal_info;
        let mut page = page_root();

        let mut head = Block::new()
            .background(DARK)
            .padding(Edges::symmetric(20.0, 26.0))
            .gap(4.0)
            .child(mono(&format!("$ whoami: {}", display_name(info)), 18.0).bold().color(Rgb::WHITE));
        for part in contact_parts(info).into_iter().chain(link_parts(info)) {
            head = head.child(mono(&format!("> {part}"), 9.0).color(Rgb::new(0x9c, 0xa3, 0xaf)));
        }
        if !info.summary.trim().is_empty() {
            head = head.child(mono(info.summary.trim(), 9.5).color(Rgb::new(0xd1, 0xd5, 0xdb)));
        }
        page = page.child(head);

        let mut body = Block::new().padding(Edges::all(24.0)).gap(14.0);
        let bullet_style = TextStyle {
            family: FontFamily::Mono,
            size: 9.5,
            color: INK,
            ..Default::default()
        };

        if has_entries(&data.work_experience) {
            let mut section = heading("experience");
            for work in &data.work_experience {
                let mut entry = Block::new().gap(2.0).margin_bottom(9.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(mono(&work.position, 11.0).bold())
                        .child(mono(&format!("[{}]", work_dates(work)), 9.0).color(DIM).right()),
                );
                let place = [work.company.trim(), work.location.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" @ ");
                if !place.is_empty() {
                    entry = entry.child(mono(&place, 10.0).color(DIM));
                }
                entry = entry.children(bullet_nodes(&work.description, &bullet_style, "* "));
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.skills) {
            let mut section = heading("skills");
            for (category, members) in grouped_skills(&data.skills) {
                section = section.child(mono(&format!("# {category}"), 10.0).bold().color(DIM));
                for skill in members {
                    let filled = skill.level.rank();
                    let bar: String = "#".repeat(filled) + &"-".repeat(4 - filled);
                    section = section.child(
                        mono(&format!("  {:<24}[{bar}]", skill.name), 9.5),
                    );
                }
            }
            body = body.child(section);
        }

        if has_entries(&data.projects) {
            let mut section = heading("projects");
            for project in &data.projects {
                let mut entry = Block::new().gap(1.0).margin_bottom(8.0);
                entry = entry.child(mono(&project.name, 11.0).bold());
                if !project.description.trim().is_empty() {
                    entry = entry.child(mono(project.description.trim(), 9.5).color(INK));
                }
                if !project.technologies.is_empty() {
                    entry = entry.child(
                        mono(&format!("stack: {}", project.technologies.join(", ")), 9.0).color(DIM),
                    );
                }
                for link in [opt_text(&project.link), opt_text(&project.github)].into_iter().flatten()
                {
                    entry = entry.child(mono(&format!("-> {link}"), 9.0).color(DIM));
                }
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.education) {
            let mut section = heading("education");
            for edu in &data.education {
                let mut entry = Block::new().gap(1.0).margin_bottom(7.0);
                entry = entry.child(
                    Block::new()
                        .row()
                        .child(mono(&edu.institution, 10.5).bold())
                        .child(
                            mono(&format!("[{}]", date_range(&edu.start_date, &edu.end_date, false)), 9.0)
                                .color(DIM)
                                .right(),
                        ),
                );
                let degree = [edu.degree.trim(), edu.field.trim()]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(" / ");
                if !degree.is_empty() {
                    entry = entry.child(mono(&degree, 9.5).color(DIM));
                }
                section = section.child(entry);
            }
            body = body.child(section);
        }

        if has_entries(&data.certificates) {
            let mut section = heading("certs");
            for cert in &data.certificates {
                let mut line = cert.name.trim().to_string();
                if !cert.issuer.trim().is_empty() {
                    line.push_str(&format!(" ({})", cert.issuer.trim()));
                }
                section = section.child(mono(&format!("* {line}"), 9.5));
            }
            body = body.child(section);
        }

        if has_entries(&data.achievements) {
            let mut section = heading("achievements");
            for ach in &data.achievements {
                section = section.child(mono(&format!("* {}", ach.title.trim()), 9.5).bold());
                if !ach.description.trim().is_empty() {
                    section = section.child(mono(&format!("  {}", ach.description.trim()), 9.0).color(DIM));
                }
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
            body = body.child(heading("hobbies").child(mono(&names, 9.5)));
        }

        VisualDocument::new(page.child(body))
    }
}

fn mono(content: &str, size: f32) -> Text {
    Text::new(content).family(FontFamily::Mono).size(size).color(INK)
}

fn heading(title: &str) -> Block {
    Block::new().gap(4.0).child(
        Block::new()
            .border_bottom(Border::new(1.0, RULE))
            .child(mono(&format!("## {title}"), 12.0).bold()),
    )
}
