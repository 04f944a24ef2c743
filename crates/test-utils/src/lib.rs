use std::collections::{HashMap, HashSet};
use std::sync::Once;

// --- Tracing ---

static INIT: Once = Once::new();

/// Initializes the tracing subscriber once per test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    });
}

// --- lz-string Compressor ---

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const BITS_PER_CHAR: u32 = 6;

/// Packs codes into Base64 characters, least significant bit of each code first.
#[derive(Default)]
struct BitWriter {
    data: String,
    value: usize,
    position: u32,
}

impl BitWriter {
    fn push_bit(&mut self, bit: usize) {
        self.value = (self.value << 1) | bit;
        if self.position == BITS_PER_CHAR - 1 {
            self.position = 0;
            self.data.push(BASE64_ALPHABET[self.value] as char);
            self.value = 0;
        } else {
            self.position += 1;
        }
    }

    fn write_bits(&mut self, count: u32, mut value: usize) {
        for _ in 0..count {
            self.push_bit(value & 1);
            value >>= 1;
        }
    }

    fn finish(mut self) -> String {
        loop {
            self.value <<= 1;
            if self.position == BITS_PER_CHAR - 1 {
                self.data.push(BASE64_ALPHABET[self.value] as char);
                break;
            }
            self.position += 1;
        }
        match self.data.len() % 4 {
            1 => self.data.push_str("==="),
            2 => self.data.push_str("=="),
            3 => self.data.push('='),
            _ => {}
        }
        self.data
    }
}

struct Compressor {
    dictionary: HashMap<Vec<u16>, usize>,
    pending_literals: HashSet<Vec<u16>>,
    enlarge_in: usize,
    dict_size: usize,
    num_bits: u32,
    out: BitWriter,
}

impl Compressor {
    fn new() -> Self {
        Self {
            dictionary: HashMap::new(),
            pending_literals: HashSet::new(),
            enlarge_in: 2,
            dict_size: 3,
            num_bits: 2,
            out: BitWriter::default(),
        }
    }

    fn tick(&mut self) {
        self.enlarge_in -= 1;
        if self.enlarge_in == 0 {
            self.enlarge_in = 1 << self.num_bits;
            self.num_bits += 1;
        }
    }

    fn emit(&mut self, phrase: &[u16]) {
        if self.pending_literals.remove(phrase) {
            let unit = phrase[0];
            if unit < 256 {
                self.out.write_bits(self.num_bits, 0);
                self.out.write_bits(8, unit as usize);
            } else {
                self.out.write_bits(self.num_bits, 1);
                self.out.write_bits(16, unit as usize);
            }
            self.tick();
        } else {
            let code = self.dictionary[phrase];
            self.out.write_bits(self.num_bits, code);
        }
        self.tick();
    }

    fn compress(mut self, units: &[u16]) -> String {
        let mut phrase: Vec<u16> = Vec::new();
        for &unit in units {
            let single = vec![unit];
            if !self.dictionary.contains_key(&single) {
                self.dictionary.insert(single.clone(), self.dict_size);
                self.dict_size += 1;
                self.pending_literals.insert(single);
            }
            let mut extended = phrase.clone();
            extended.push(unit);
            if self.dictionary.contains_key(&extended) {
                phrase = extended;
            } else {
                self.emit(&phrase);
                self.dictionary.insert(extended, self.dict_size);
                self.dict_size += 1;
                phrase = vec![unit];
            }
        }
        if !phrase.is_empty() {
            self.emit(&phrase);
        }
        self.out.write_bits(self.num_bits, 2);
        self.out.finish()
    }
}

/// Compresses raw UTF-16 code units the way lz-string's `compressToBase64` does.
pub fn compress_units_to_base64(units: &[u16]) -> String {
    Compressor::new().compress(units)
}

/// Compresses a string the way lz-string's `compressToBase64` does.
pub fn compress_to_base64(text: &str) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    compress_units_to_base64(&units)
}

// --- Document Fixtures ---

/// Builds the JSON object literal carrying `compressed` as its `content`.
pub fn payload_json(compressed: &str) -> String {
    serde_json::json!({ "title": "Help", "content": compressed }).to_string()
}

/// Wraps a payload literal in a minified-bundle-looking JavaScript document.
pub fn js_bundle(payload: &str) -> String {
    format!(
        "\"use strict\";(self.webpackChunk=self.webpackChunk||[]).push([[42],{{\
         1337:function(e,t,n){{n.d(t,{{docs:function(){{return r}}}});\
         var r=JSON.parse('{payload}')}}}}]);\n"
    )
}

/// A complete document embedding `text`, compressed.
pub fn js_bundle_for_text(text: &str) -> String {
    js_bundle(&payload_json(&compress_to_base64(text)))
}
