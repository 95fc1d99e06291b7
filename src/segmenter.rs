//! Consumer-facing entry point: text in, tokens out.

use std::collections::VecDeque;
use std::io::{self, Read};
use std::iter::FusedIterator;
use std::sync::Arc;

use tracing::{debug, debug_span, Span as TraceSpan};

use crate::collector::{Mode, ScanState, Span, TokenCollector};
use crate::dict::{DictError, Dictionaries, DictionaryRegistry};
use crate::knife::Knife;
use crate::settings::Settings;
use crate::token::Token;

pub struct Segmenter {
    knife: Knife,
    mode: Mode,
}

impl Segmenter {
    pub fn new(dicts: Arc<Dictionaries>, mode: Mode) -> Self {
        Self {
            knife: Knife::new(dicts),
            mode,
        }
    }

    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.knife = self.knife.with_max_word_length(max_word_length);
        self
    }

    /// Build from settings, loading dictionaries through the process-wide
    /// registry so equal configurations share one dictionary set.
    pub fn from_settings(settings: &Settings) -> Result<Self, DictError> {
        Self::from_registry(DictionaryRegistry::global(), settings)
    }

    pub fn from_registry(
        registry: &DictionaryRegistry,
        settings: &Settings,
    ) -> Result<Self, DictError> {
        let config = &settings.dictionary;
        let dicts = registry.get_or_load(config)?;
        Ok(Self::new(dicts, settings.segmenter.mode).with_max_word_length(config.max_word_length))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn knife(&self) -> &Knife {
        &self.knife
    }

    /// Lazily segment `text`.
    pub fn segment<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        TokenStream::new(&self.knife, self.mode.collector(), text, self.mode)
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.segment(text).collect()
    }

    /// Read the whole UTF-8 stream and segment it.
    pub fn segment_reader<R: Read>(&self, mut reader: R) -> io::Result<Vec<Token>> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(self.tokenize(&text))
    }
}

/// Iterator over the tokens of one input. Finite and not restartable.
pub struct TokenStream<'a> {
    knife: &'a Knife,
    collector: &'a dyn TokenCollector,
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, plus `text.len()` at the end.
    byte_offsets: Vec<usize>,
    cursor: usize,
    state: ScanState,
    pending: VecDeque<Span>,
    prev: Option<Span>,
    emitted: usize,
    done: bool,
    span: TraceSpan,
}

impl<'a> TokenStream<'a> {
    fn new(
        knife: &'a Knife,
        collector: &'a dyn TokenCollector,
        text: &'a str,
        mode: Mode,
    ) -> Self {
        let (byte_offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        let mut byte_offsets = byte_offsets;
        byte_offsets.push(text.len());
        let span = debug_span!("segment", chars = chars.len(), %mode);
        Self {
            knife,
            collector,
            text,
            chars,
            byte_offsets,
            cursor: 0,
            state: ScanState::default(),
            pending: VecDeque::new(),
            prev: None,
            emitted: 0,
            done: false,
            span,
        }
    }

    fn emit(&mut self, span: Span) -> Token {
        let position_increment = match self.prev {
            Some(prev) if span.start < prev.end && prev.start < span.end => 0,
            _ => 1,
        };
        self.prev = Some(span);
        self.emitted += 1;

        let start_offset = self.byte_offsets[span.start];
        let end_offset = self.byte_offsets[span.end];
        Token {
            text: self.text[start_offset..end_offset].to_string(),
            start_offset,
            end_offset,
            position_increment,
            kind: span.kind,
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(span) = self.pending.pop_front() {
                return Some(self.emit(span));
            }
            if self.cursor >= self.chars.len() {
                if !self.done {
                    self.done = true;
                    let _enter = self.span.enter();
                    debug!(tokens = self.emitted, "segmentation finished");
                }
                return None;
            }
            let _enter = self.span.enter();
            let lattice = self.knife.lattice_at(&self.chars, self.cursor);
            let step = self
                .collector
                .collect(&lattice, &mut self.state, &mut self.pending);
            self.cursor += step;
        }
    }
}

impl FusedIterator for TokenStream<'_> {}
