//! Line scanner locating spyce blocks and section anchors

use crate::error::{Result, duplicated_spyce, unexpected_directive, unknown_spyce_type};
use crate::format::{Action, Section, SpyceKey, SpyceType};

use super::{Curry, SpyceItem};

impl Curry {
    /// Scan all lines, filling in blocks and anchors
    ///
    /// A start marker that is followed by another start marker, or by the end of the
    /// file, yields an unclosed block made of the marker line only.
    pub(super) fn parse_lines(&mut self) -> Result<()> {
        let style = self.style;
        let mut open: Option<SpyceItem> = None;

        for (index, line) in self.lines.iter().enumerate() {
            if let Some(section) = style.match_section(line) {
                match section {
                    Section::Source => self.source_anchor = Some(index),
                    Section::Data => self.data_anchor = Some(index),
                }
            }

            let Some(directive) = style.match_directive(line) else {
                continue;
            };
            match directive.action {
                Action::End => {
                    let matches_open = open.as_ref().is_some_and(|item| {
                        item.section() == directive.section && item.name() == directive.name
                    });
                    if !matches_open {
                        return Err(unexpected_directive(
                            &self.filename,
                            index,
                            format!("{} {} {}", directive.section, directive.action, directive.name),
                        ));
                    }
                    if let Some(mut item) = open.take() {
                        item.end = index + 1;
                        item.closed = true;
                        self.items.push(item);
                    }
                }
                Action::Start => {
                    if let Some(item) = open.take() {
                        self.items.push(item);
                    }
                    let key = SpyceKey::new(directive.section, directive.name)?;
                    let spyce_type = match directive.spyce_type {
                        Some(name) => name
                            .parse::<SpyceType>()
                            .map_err(|_| unknown_spyce_type(&self.filename, index, name))?,
                        None => directive.section.default_type(),
                    };
                    if self.items.iter().any(|item| item.key == key) {
                        return Err(duplicated_spyce(&self.filename, index, key.to_string()));
                    }
                    open = Some(SpyceItem {
                        key,
                        spyce_type,
                        start: index,
                        end: index + 1,
                        closed: false,
                    });
                }
            }
        }
        if let Some(item) = open.take() {
            self.items.push(item);
        }
        Ok(())
    }
}
