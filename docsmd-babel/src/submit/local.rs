//! In-memory document service.
//!
//! [`LocalDocument`] keeps a document the way the remote service indexes it: a
//! flat sequence of UTF-16 code units starting at index 1, where every
//! paragraph ends with a `'\n'` unit that carries the paragraph's attributes.
//! A fresh document is a single empty paragraph, so its only unit is the
//! `'\n'` at index 1.
//!
//! Requests are validated against the current content and a batch is applied
//! to a scratch copy, replacing the live content only when every request in
//! it succeeded.

use crate::error::ServiceError;
use crate::formats::docs::model::{
    Bullet, Document, Link, Paragraph, ParagraphElement, ParagraphStyle, StructuralElement,
    TextRun, TextStyle,
};
use crate::formats::docs::requests::{
    CreateParagraphBulletsRequest, InsertTextRequest, Range, Request,
    UpdateParagraphStyleRequest, UpdateTextStyleRequest,
};
use crate::formats::docs::styles::NamedStyle;
use crate::submit::DocumentService;

const NEWLINE: u16 = b'\n' as u16;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ParagraphAttrs {
    style: NamedStyle,
    bullet: Option<Bullet>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Unit {
    code: u16,
    link: Option<String>,
    /// Set on paragraph terminators only
    paragraph: Option<ParagraphAttrs>,
}

impl Unit {
    fn terminator(attrs: ParagraphAttrs) -> Self {
        Unit {
            code: NEWLINE,
            link: None,
            paragraph: Some(attrs),
        }
    }

    fn is_terminator(&self) -> bool {
        self.code == NEWLINE
    }

    fn is_low_surrogate(&self) -> bool {
        (0xDC00..=0xDFFF).contains(&self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDocument {
    document_id: String,
    title: String,
    units: Vec<Unit>,
    lists_created: usize,
    revision: usize,
}

impl LocalDocument {
    pub fn new(document_id: impl Into<String>, title: impl Into<String>) -> Self {
        LocalDocument {
            document_id: document_id.into(),
            title: title.into(),
            units: vec![Unit::terminator(ParagraphAttrs::default())],
            lists_created: 0,
            revision: 0,
        }
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Number of committed batches.
    pub fn revision(&self) -> usize {
        self.revision
    }

    /// Index of the final paragraph terminator.
    pub fn end_index(&self) -> usize {
        self.units.len()
    }

    /// Full text, paragraph terminators included.
    pub fn text(&self) -> String {
        let codes: Vec<u16> = self.units.iter().map(|unit| unit.code).collect();
        String::from_utf16_lossy(&codes)
    }

    /// Apply a single request in place.
    ///
    /// On error the document may be partially modified; [`DocumentService::batch_update`]
    /// is the transactional entry point.
    pub fn apply(&mut self, request: &Request) -> Result<(), ServiceError> {
        match request {
            Request::InsertText(request) => self.insert_text(request),
            Request::UpdateParagraphStyle(request) => self.update_paragraph_style(request),
            Request::CreateParagraphBullets(request) => self.create_paragraph_bullets(request),
            Request::UpdateTextStyle(request) => self.update_text_style(request),
        }
    }

    fn insert_text(&mut self, request: &InsertTextRequest) -> Result<(), ServiceError> {
        let index = request.location.index;
        if request.text.is_empty() {
            return Err(ServiceError::new("Insert text requests must specify text to insert."));
        }
        self.check_index(index)?;
        let position = index - 1;
        if self.units[position].is_low_surrogate() {
            return Err(ServiceError::new(format!(
                "The insertion index {index} cannot split a surrogate pair."
            )));
        }

        let containing = self.paragraph_attrs(position);
        let splits_at_end = self.units[position].is_terminator() && request.text.contains('\n');
        let inserted: Vec<Unit> = request
            .text
            .encode_utf16()
            .map(|code| Unit {
                code,
                link: None,
                paragraph: (code == NEWLINE).then(|| containing.clone()),
            })
            .collect();
        let inserted_len = inserted.len();
        self.units.splice(position..position, inserted);

        if splits_at_end {
            // The old terminator now ends an empty trailing paragraph.
            self.units[position + inserted_len].paragraph = Some(ParagraphAttrs::default());
        }
        Ok(())
    }

    fn update_paragraph_style(
        &mut self,
        request: &UpdateParagraphStyleRequest,
    ) -> Result<(), ServiceError> {
        let name = &request.paragraph_style.named_style_type;
        let style = NamedStyle::parse(name)
            .ok_or_else(|| ServiceError::new(format!("Unknown named style type: {name}")))?;
        let (first, last) = self.check_range(request.range)?;
        for attrs in self.paragraphs_touching(first, last) {
            attrs.style = style;
        }
        Ok(())
    }

    fn create_paragraph_bullets(
        &mut self,
        request: &CreateParagraphBulletsRequest,
    ) -> Result<(), ServiceError> {
        if request.bullet_preset.is_empty() {
            return Err(ServiceError::new("A bullet preset must be specified."));
        }
        let (first, last) = self.check_range(request.range)?;
        self.lists_created += 1;
        let bullet = Bullet {
            list_id: format!("list.{}", self.lists_created),
            nesting_level: None,
        };
        for attrs in self.paragraphs_touching(first, last) {
            attrs.bullet = Some(bullet.clone());
        }
        Ok(())
    }

    fn update_text_style(&mut self, request: &UpdateTextStyleRequest) -> Result<(), ServiceError> {
        let (first, last) = self.check_range(request.range)?;
        let touches_link = request.fields.split(',').any(|field| field.trim() == "link");
        if !touches_link {
            return Ok(());
        }
        let url = request.text_style.link.as_ref().map(|link| link.url.clone());
        for unit in &mut self.units[first..=last] {
            unit.link = url.clone();
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ServiceError> {
        if index < 1 || index > self.end_index() {
            return Err(ServiceError::new(format!(
                "Index {index} must be between 1 and the end index of the segment, {}.",
                self.end_index()
            )));
        }
        Ok(())
    }

    /// Validate a half-open range and return it as inclusive unit positions.
    fn check_range(&self, range: Range) -> Result<(usize, usize), ServiceError> {
        if range.start_index >= range.end_index {
            return Err(ServiceError::new(format!(
                "Invalid range: start index {} must be less than end index {}.",
                range.start_index, range.end_index
            )));
        }
        self.check_index(range.start_index)?;
        self.check_index(range.end_index - 1)?;
        Ok((range.start_index - 1, range.end_index - 2))
    }

    /// Position of the terminator of the paragraph containing `position`.
    fn terminator_at_or_after(&self, position: usize) -> usize {
        self.units[position..]
            .iter()
            .position(Unit::is_terminator)
            .map(|offset| position + offset)
            .unwrap_or(self.units.len() - 1)
    }

    fn paragraph_attrs(&self, position: usize) -> ParagraphAttrs {
        let terminator = self.terminator_at_or_after(position);
        self.units[terminator].paragraph.clone().unwrap_or_default()
    }

    fn paragraphs_touching(
        &mut self,
        first: usize,
        last: usize,
    ) -> impl Iterator<Item = &mut ParagraphAttrs> {
        let from = self.terminator_at_or_after(first);
        let to = self.terminator_at_or_after(last);
        self.units[from..=to]
            .iter_mut()
            .filter(|unit| unit.is_terminator())
            .map(|unit| unit.paragraph.get_or_insert_with(ParagraphAttrs::default))
    }

    /// Export the current content as a structured document.
    pub fn to_document(&self) -> Document {
        let mut content = Vec::new();
        let mut paragraph_start = 0;

        for (position, unit) in self.units.iter().enumerate() {
            if !unit.is_terminator() {
                continue;
            }
            let units = &self.units[paragraph_start..=position];
            let attrs = unit.paragraph.clone().unwrap_or_default();
            let paragraph = Paragraph {
                elements: text_runs(units, paragraph_start + 1),
                paragraph_style: ParagraphStyle {
                    named_style_type: attrs.style.to_string(),
                },
                bullet: attrs.bullet,
            };
            content.push(StructuralElement {
                start_index: Some(paragraph_start + 1),
                end_index: Some(position + 2),
                ..StructuralElement::paragraph(paragraph)
            });
            paragraph_start = position + 1;
        }

        Document {
            document_id: self.document_id.clone(),
            ..Document::new(self.title.clone(), content)
        }
    }
}

/// Group a paragraph's units into runs of equal link.
fn text_runs(units: &[Unit], first_index: usize) -> Vec<ParagraphElement> {
    let mut elements = Vec::new();
    let mut start = 0;
    while start < units.len() {
        let link = &units[start].link;
        let len = units[start..]
            .iter()
            .take_while(|unit| &unit.link == link)
            .count();
        let codes: Vec<u16> = units[start..start + len].iter().map(|u| u.code).collect();
        let text_style = match link {
            Some(url) => TextStyle {
                link: Some(Link { url: url.clone() }),
                ..Default::default()
            },
            None => TextStyle::default(),
        };
        elements.push(ParagraphElement {
            start_index: Some(first_index + start),
            end_index: Some(first_index + start + len),
            ..ParagraphElement::text_run(TextRun::styled(
                String::from_utf16_lossy(&codes),
                text_style,
            ))
        });
        start += len;
    }
    elements
}

impl DocumentService for LocalDocument {
    fn batch_update(&mut self, document_id: &str, requests: &[Request]) -> Result<(), ServiceError> {
        if document_id != self.document_id {
            return Err(ServiceError::new(format!(
                "Requested entity was not found: {document_id}"
            )));
        }

        let mut scratch = self.clone();
        for (index, request) in requests.iter().enumerate() {
            scratch.apply(request).map_err(|err| {
                ServiceError::new(format!(
                    "Invalid requests[{index}].{}: {}",
                    request.kind(),
                    err.message
                ))
            })?;
        }
        scratch.revision += 1;
        *self = scratch;
        tracing::debug!(
            document_id,
            requests = requests.len(),
            end_index = self.end_index(),
            "applied batch to local document"
        );
        Ok(())
    }
}
