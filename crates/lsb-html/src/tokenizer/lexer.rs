//! The tokenizer.
//!
//! A single forward pass over the input. Markup is recognized by a handful
//! of productions (comment, doctype, start tag, end tag); everything else up
//! to the next `<` or `>` is a text run. Each token gets its resolved style
//! the moment it is created, from the style of the innermost open start tag.

use lsb_common::{Component, Diagnostics};
use lsb_css::{ResolvedStyle, cascade, resolve, text_style};

use super::entities::decode_entities;
use super::helpers::collapse_whitespace;
use super::stack::OpenTagStack;
use super::token::{Token, TokenId, TokenKind, TokenList};
use crate::error::ParseError;
use crate::tags::{self, TagClass, TagDescriptor, TagKind};

/// Capacity limits applied while tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserLimits {
    /// Maximum number of simultaneously open container tags.
    pub max_open_tags: usize,
    /// Maximum length of a tag or attribute name, in characters.
    pub max_name_len: usize,
    /// Maximum length of an attribute value, in characters.
    pub max_attribute_len: usize,
    /// Maximum length of a text run after collapsing, in characters.
    pub max_text_len: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        Self {
            max_open_tags: 200,
            max_name_len: 32,
            max_attribute_len: 1024,
            max_text_len: 4096,
        }
    }
}

/// Tokenizer state for one document.
pub struct Tokenizer<'a> {
    pub(super) input: &'a str,
    pub(super) pos: usize,
    limits: ParserLimits,
    stack: OpenTagStack,
    tokens: TokenList,
    parent: Option<TokenId>,
    diagnostics: &'a mut Diagnostics,
}

/// How a tag name ended.
enum TagName<'a> {
    /// A table entry followed by a proper boundary.
    Known(&'static TagDescriptor),
    /// Anything else that still looks like a name.
    Unknown(&'a str),
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `input`, reporting warnings to `diagnostics`.
    pub fn new(input: &'a str, limits: ParserLimits, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            input,
            pos: 0,
            limits,
            stack: OpenTagStack::with_capacity(limits.max_open_tags),
            tokens: TokenList::default(),
            parent: None,
            diagnostics,
        }
    }

    /// Tokenize the whole input.
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`ParseError`]. No tokens are returned in
    /// that case.
    pub fn run(mut self) -> Result<TokenList, ParseError> {
        loop {
            let spaced = self.skip_whitespace();
            match self.peek() {
                None => break,
                Some('<') => self.markup()?,
                Some('>') => {
                    return Err(ParseError::UnexpectedCharacter {
                        found: '>',
                        offset: self.pos,
                    });
                }
                Some(_) => self.text(spaced)?,
            }
        }
        Ok(self.finish())
    }

    fn finish(mut self) -> TokenList {
        for &(tag, offset) in self.stack.open_tags() {
            self.diagnostics
                .warn_at(Component::Html, offset, format!("unclosed tag <{tag}>"));
        }
        let _ = self.tokens.push(Token {
            kind: TokenKind::EndOfInput,
            style: ResolvedStyle::ROOT,
            parent: None,
        });
        self.tokens
    }

    /// Style of the innermost open start tag, copied out of the arena.
    fn parent_style(&self) -> Option<ResolvedStyle> {
        self.parent.map(|id| self.tokens[id].style)
    }

    fn markup(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        if self.next_characters_are("<!--") {
            self.pos += 4;
            if !self.skip_past("-->") {
                return Err(ParseError::Unterminated {
                    construct: "comment",
                    offset: start,
                });
            }
            Ok(())
        } else if self.next_characters_are_case_insensitive("<!doctype") {
            if !self.skip_past(">") {
                return Err(ParseError::Unterminated {
                    construct: "doctype",
                    offset: start,
                });
            }
            Ok(())
        } else if self.next_characters_are("</") {
            self.pos += 2;
            self.end_tag(start)
        } else {
            self.pos += 1;
            self.start_tag(start)
        }
    }

    /// Read a tag or attribute name of ASCII letters, digits and `-`.
    fn read_name(&mut self, what: &'static str) -> Result<&'a str, ParseError> {
        let start = self.pos;
        match self.peek() {
            None => return Err(ParseError::UnexpectedEnd { offset: self.pos }),
            Some(c) if !c.is_ascii_alphabetic() => {
                return Err(ParseError::UnexpectedCharacter {
                    found: c,
                    offset: self.pos,
                });
            }
            Some(_) => {}
        }
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            self.pos += 1;
        }
        let name = &self.input[start..self.pos];
        if name.len() > self.limits.max_name_len {
            return Err(ParseError::NameTooLong {
                what,
                limit: self.limits.max_name_len,
                offset: start,
            });
        }
        Ok(name)
    }

    fn tag_name(&mut self) -> Result<TagName<'a>, ParseError> {
        let _ = self.skip_whitespace();
        if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            return Ok(TagName::Unknown(self.read_bogus_name()));
        }
        let name = self.read_name("tag")?;
        let at_boundary = self
            .peek()
            .is_some_and(|c| c == '>' || c == '/' || c.is_ascii_whitespace());
        match tags::lookup(name) {
            Some(descriptor) if at_boundary => Ok(TagName::Known(descriptor)),
            _ => Ok(TagName::Unknown(name)),
        }
    }

    /// Whatever follows `<` or `</` when it is not a name, up to `>` or
    /// whitespace. Covers `<?xml ...?>`, `<!x>` and `</>`.
    fn read_bogus_name(&mut self) -> &'a str {
        let start = self.pos;
        let rest = &self.input[start..];
        self.pos += rest
            .find(|c: char| c == '>' || c.is_ascii_whitespace())
            .unwrap_or(rest.len());
        &self.input[start..self.pos]
    }

    /// Skip the rest of a tag whose contents are not interpreted.
    fn skip_tag(&mut self, start: usize) -> Result<(), ParseError> {
        if self.skip_past(">") {
            Ok(())
        } else {
            Err(ParseError::Unterminated {
                construct: "tag",
                offset: start,
            })
        }
    }

    fn start_tag(&mut self, start: usize) -> Result<(), ParseError> {
        let descriptor = match self.tag_name()? {
            TagName::Known(descriptor) => descriptor,
            TagName::Unknown(name) => {
                self.diagnostics
                    .warn_at(Component::Html, start, format!("ignored start tag: <{name}>"));
                return self.skip_tag(start);
            }
        };

        match descriptor.class {
            TagClass::Void => self.void_tag(descriptor, start),
            TagClass::Container => self.container_tag(descriptor, start),
        }
    }

    fn void_tag(&mut self, descriptor: &TagDescriptor, start: usize) -> Result<(), ParseError> {
        self.skip_tag(start)?;
        if descriptor.kind == TagKind::Img {
            self.diagnostics
                .warn_at(Component::Html, start, "img tag is ignored");
        }
        let style = cascade(self.parent_style().as_ref(), &descriptor.defaults);
        let _ = self.tokens.push(Token {
            kind: TokenKind::SelfClosingTag(descriptor.kind),
            style,
            parent: self.parent,
        });
        Ok(())
    }

    fn container_tag(&mut self, descriptor: &TagDescriptor, start: usize) -> Result<(), ParseError> {
        let inline = self.read_attributes(start)?;
        let style = resolve(
            self.parent_style().as_ref(),
            &descriptor.defaults,
            inline,
            self.diagnostics,
        )
        .map_err(|source| ParseError::Style {
            source,
            offset: start,
        })?;

        self.stack.push(descriptor.kind, start)?;
        let id = self.tokens.push(Token {
            kind: TokenKind::StartTag(descriptor.kind),
            style,
            parent: self.parent,
        });
        self.parent = Some(id);

        if descriptor.kind == TagKind::Script {
            self.skip_script_body(start)?;
        }
        Ok(())
    }

    /// Position the cursor on the `</script` that ends a script body.
    fn skip_script_body(&mut self, start: usize) -> Result<(), ParseError> {
        let rest = self.rest().to_ascii_lowercase();
        match rest.find("</script") {
            Some(index) => {
                self.pos += index;
                Ok(())
            }
            None => Err(ParseError::Unterminated {
                construct: "script",
                offset: start,
            }),
        }
    }

    /// Parse attributes up to and including the closing `>`. Returns the
    /// value of the first `style` attribute, if any.
    fn read_attributes(&mut self, start: usize) -> Result<Option<&'a str>, ParseError> {
        let mut style = None;
        loop {
            let _ = self.skip_whitespace();
            match self.peek() {
                None => {
                    return Err(ParseError::Unterminated {
                        construct: "tag",
                        offset: start,
                    });
                }
                Some('>') => {
                    self.pos += 1;
                    return Ok(style);
                }
                Some('/') => self.pos += 1,
                Some(_) => {
                    let offset = self.pos;
                    let name = self.read_name("attribute")?;
                    let value = self.attribute_value()?;
                    if name.eq_ignore_ascii_case("style") {
                        if style.is_none() {
                            style = Some(value.unwrap_or(""));
                        } else {
                            self.diagnostics.warn_at(
                                Component::Html,
                                offset,
                                "duplicate style attribute ignored",
                            );
                        }
                    } else if name.eq_ignore_ascii_case("id") || name.eq_ignore_ascii_case("class")
                    {
                        self.diagnostics.warn_at(
                            Component::Html,
                            offset,
                            format!("attribute '{}' is not supported", name.to_ascii_lowercase()),
                        );
                    }
                }
            }
        }
    }

    /// Parse an optional `= value` after an attribute name.
    fn attribute_value(&mut self) -> Result<Option<&'a str>, ParseError> {
        let _ = self.skip_whitespace();
        if self.peek() != Some('=') {
            return Ok(None);
        }
        self.pos += 1;
        let _ = self.skip_whitespace();

        let start = self.pos;
        let value = match self.peek() {
            None => return Err(ParseError::UnexpectedEnd { offset: self.pos }),
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let Some(len) = self.rest().find(quote) else {
                    return Err(ParseError::Unterminated {
                        construct: "attribute value",
                        offset: start,
                    });
                };
                let value = &self.input[self.pos..self.pos + len];
                self.pos += len + 1;
                value
            }
            Some(_) => {
                while self
                    .peek()
                    .is_some_and(|c| c != '>' && !c.is_ascii_whitespace())
                {
                    let _ = self.consume();
                }
                &self.input[start..self.pos]
            }
        };

        if value.chars().count() > self.limits.max_attribute_len {
            return Err(ParseError::AttributeTooLong {
                limit: self.limits.max_attribute_len,
                offset: start,
            });
        }
        Ok(Some(value))
    }

    fn end_tag(&mut self, start: usize) -> Result<(), ParseError> {
        let descriptor = match self.tag_name()? {
            TagName::Known(descriptor) => descriptor,
            TagName::Unknown(name) => {
                self.diagnostics
                    .warn_at(Component::Html, start, format!("ignored end tag: </{name}>"));
                return self.skip_tag(start);
            }
        };
        self.skip_tag(start)?;

        if descriptor.class == TagClass::Void {
            self.diagnostics.warn_at(
                Component::Html,
                start,
                format!("ignored end tag for void element: </{}>", descriptor.kind),
            );
            return Ok(());
        }

        self.stack.pop(descriptor.kind, start)?;

        // The stack and the parent chain move together, so the parent is the
        // start tag being closed.
        let (style, grandparent) = match self.parent {
            Some(id) => (self.tokens[id].style, self.tokens[id].parent),
            None => (ResolvedStyle::ROOT, None),
        };
        let _ = self.tokens.push(Token {
            kind: TokenKind::EndTag(descriptor.kind),
            style,
            parent: grandparent,
        });
        self.parent = grandparent;
        Ok(())
    }

    fn text(&mut self, spaced: bool) -> Result<(), ParseError> {
        let start = self.pos;
        let len = self
            .rest()
            .find(['<', '>'])
            .unwrap_or_else(|| self.rest().len());
        self.pos += len;

        let raw = &self.input[start..self.pos];
        let mut text = String::with_capacity(raw.len() + 1);
        if spaced {
            text.push(' ');
        }
        text.push_str(raw);
        let text = decode_entities(&collapse_whitespace(&text));

        if text.chars().count() > self.limits.max_text_len {
            return Err(ParseError::TextTooLong {
                limit: self.limits.max_text_len,
                offset: start,
            });
        }

        let style = text_style(self.parent_style().as_ref());
        let _ = self.tokens.push(Token {
            kind: TokenKind::PlainText(text),
            style,
            parent: self.parent,
        });
        Ok(())
    }
}

/// Tokenize `input` in one call.
///
/// # Errors
///
/// See [`Tokenizer::run`].
///
/// # Example
/// ```
/// use lsb_common::Diagnostics;
/// use lsb_html::{ParserLimits, TokenKind, tokenize};
///
/// let mut diagnostics = Diagnostics::quiet();
/// let tokens = tokenize("<p>hi</p>", ParserLimits::default(), &mut diagnostics).unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens.tokens()[3].kind, TokenKind::EndOfInput);
/// ```
pub fn tokenize(
    input: &str,
    limits: ParserLimits,
    diagnostics: &mut Diagnostics,
) -> Result<TokenList, ParseError> {
    Tokenizer::new(input, limits, diagnostics).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsb_css::{Color, DisplayValue, FontWeight, StyleOverrides};

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut diagnostics = Diagnostics::quiet();
        tokenize(input, ParserLimits::default(), &mut diagnostics)
            .unwrap()
            .tokens()
            .iter()
            .map(|t| t.kind.clone())
            .collect()
    }

    fn error(input: &str) -> ParseError {
        let mut diagnostics = Diagnostics::quiet();
        tokenize(input, ParserLimits::default(), &mut diagnostics).unwrap_err()
    }

    #[test]
    fn test_empty_input_is_just_eof() {
        assert_eq!(kinds(""), [TokenKind::EndOfInput]);
        assert_eq!(kinds(" \n\t "), [TokenKind::EndOfInput]);
    }

    #[test]
    fn test_leading_space_preserved_before_text() {
        assert_eq!(
            kinds("<p>a <em>b</em> c</p>"),
            [
                TokenKind::StartTag(TagKind::P),
                TokenKind::PlainText("a ".into()),
                TokenKind::StartTag(TagKind::Em),
                TokenKind::PlainText("b".into()),
                TokenKind::EndTag(TagKind::Em),
                TokenKind::PlainText(" c".into()),
                TokenKind::EndTag(TagKind::P),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_comments_and_doctype_are_dropped() {
        assert_eq!(
            kinds("<!DOCTYPE html><!-- <p>no</p> --><br>"),
            [TokenKind::SelfClosingTag(TagKind::Br), TokenKind::EndOfInput]
        );
        assert_eq!(kinds("<!doctype HTML>"), [TokenKind::EndOfInput]);
    }

    #[test]
    fn test_unterminated_comment() {
        assert_eq!(
            error("<p><!-- open"),
            ParseError::Unterminated {
                construct: "comment",
                offset: 3
            }
        );
    }

    #[test]
    fn test_tag_name_needs_boundary() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize("<ulx>t</ulx>", ParserLimits::default(), &mut diagnostics).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_whitespace_inside_markup() {
        assert_eq!(
            kinds("< p >x</ p >"),
            [
                TokenKind::StartTag(TagKind::P),
                TokenKind::PlainText("x".into()),
                TokenKind::EndTag(TagKind::P),
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_uppercase_tags() {
        assert_eq!(
            kinds("<STRONG>x</Strong>")[..3],
            [
                TokenKind::StartTag(TagKind::Strong),
                TokenKind::PlainText("x".into()),
                TokenKind::EndTag(TagKind::Strong),
            ]
        );
    }

    #[test]
    fn test_void_tags_do_not_touch_the_stack() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize(
            "<p>a<br/>b<img src=x.png></p>",
            ParserLimits::default(),
            &mut diagnostics,
        )
        .unwrap();
        let br = &tokens.tokens()[2];
        assert_eq!(br.kind, TokenKind::SelfClosingTag(TagKind::Br));
        assert_eq!(br.parent, Some(TokenId(0)));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.warnings()[0].message.contains("img"));
    }

    #[test]
    fn test_void_end_tag_is_ignored() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize("<p>a</br></p>", ParserLimits::default(), &mut diagnostics).unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_attributes_in_all_forms() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize(
            "<a href=x.html id='top' class=\"c\" hidden style='font-weight:bold'>l</a>",
            ParserLimits::default(),
            &mut diagnostics,
        )
        .unwrap();
        let a = &tokens.tokens()[0];
        assert_eq!(a.style.font_weight, FontWeight::Bold);
        assert_eq!(a.style.color, Color::BLUE);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_first_style_attribute_wins() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize(
            "<span style=\"color:#00ff00\" style=\"color:#0000ff\">x</span>",
            ParserLimits::default(),
            &mut diagnostics,
        )
        .unwrap();
        assert_eq!(tokens.tokens()[0].style.color, Color::rgb(0, 255, 0));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_unterminated_attribute_value() {
        assert!(matches!(
            error("<p style='color:#000000>x</p>"),
            ParseError::Unterminated {
                construct: "attribute value",
                ..
            }
        ));
    }

    #[test]
    fn test_script_body_is_skipped() {
        assert_eq!(
            kinds("<script>if (a < b) { x = '</p>'; }</SCRIPT><p>y</p>")[..3],
            [
                TokenKind::StartTag(TagKind::Script),
                TokenKind::EndTag(TagKind::Script),
                TokenKind::StartTag(TagKind::P),
            ]
        );
        assert!(matches!(
            error("<script>forever"),
            ParseError::Unterminated {
                construct: "script",
                ..
            }
        ));
    }

    #[test]
    fn test_stray_close_bracket_is_fatal() {
        assert_eq!(
            error("a > b"),
            ParseError::UnexpectedCharacter {
                found: '>',
                offset: 2
            }
        );
        assert!(matches!(
            error("<3"),
            ParseError::Unterminated {
                construct: "tag",
                offset: 0
            }
        ));
        assert!(matches!(
            error("<"),
            ParseError::Unterminated {
                construct: "tag",
                offset: 0
            }
        ));
    }

    #[test]
    fn test_tags_without_a_name_are_ignored() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize(
            "<?xml version=\"1.0\"?><!x><p>x</3></></p>",
            ParserLimits::default(),
            &mut diagnostics,
        )
        .unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|(_, t)| t.kind.clone()).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::StartTag(TagKind::P),
                TokenKind::PlainText("x".to_string()),
                TokenKind::EndTag(TagKind::P),
                TokenKind::EndOfInput,
            ]
        );
        let messages: Vec<&str> = diagnostics
            .warnings()
            .iter()
            .map(|w| w.message.as_str())
            .collect();
        assert_eq!(
            messages,
            [
                "ignored start tag: <?xml>",
                "ignored start tag: <!x>",
                "ignored end tag: </3>",
                "ignored end tag: </>",
            ]
        );
        assert_eq!(diagnostics.warnings()[0].offset, Some(0));
    }

    #[test]
    fn test_limits_are_enforced() {
        let limits = ParserLimits {
            max_open_tags: 2,
            max_name_len: 8,
            max_attribute_len: 4,
            max_text_len: 5,
        };
        let run = |input: &str| {
            let mut diagnostics = Diagnostics::quiet();
            tokenize(input, limits, &mut diagnostics).unwrap_err()
        };

        assert!(matches!(
            run("<div><div><div>"),
            ParseError::StackOverflow { capacity: 2, .. }
        ));
        assert!(matches!(
            run("<averyverylongname>"),
            ParseError::NameTooLong { what: "tag", .. }
        ));
        assert!(matches!(
            run("<p style='color:#000000'>"),
            ParseError::AttributeTooLong { limit: 4, .. }
        ));
        assert!(matches!(
            run("<p>toolong</p>"),
            ParseError::TextTooLong { limit: 5, .. }
        ));
    }

    #[test]
    fn test_unclosed_tags_warn_at_end() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize("<div><p>x", ParserLimits::default(), &mut diagnostics).unwrap();
        assert_eq!(tokens.len(), 4);
        let messages: Vec<&str> = diagnostics
            .warnings()
            .iter()
            .map(|w| w.message.as_str())
            .collect();
        assert_eq!(messages, ["unclosed tag <div>", "unclosed tag <p>"]);
    }

    #[test]
    fn test_end_tag_style_and_parent() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize("<div><h1>t</h1></div>", ParserLimits::default(), &mut diagnostics)
            .unwrap();
        let open = &tokens.tokens()[1];
        let close = &tokens.tokens()[3];
        assert_eq!(close.kind, TokenKind::EndTag(TagKind::H1));
        assert_eq!(close.style, open.style);
        assert_eq!(close.parent, Some(TokenId(0)));
        assert_eq!(tokens.tokens()[4].parent, None);
    }

    #[test]
    fn test_style_defaults_unused_for_text() {
        let mut diagnostics = Diagnostics::quiet();
        let tokens = tokenize("<div>x</div>", ParserLimits::default(), &mut diagnostics).unwrap();
        let expected = StyleOverrides::display(DisplayValue::Inline)
            .apply_to(&ResolvedStyle::ROOT);
        assert_eq!(tokens.tokens()[1].style, expected);
    }
}
