//! WebAssembly bindings: a `PuzzleBoard` class for JS consumers.
//!
//! Result values cross the boundary as serialized `{word, path}` objects and
//! solutions as compact JSON index arrays, so the JS side never holds raw
//! references into engine memory; dropping the class instance (wasm-bindgen's
//! generated `free()`) releases everything.

use std::rc::Rc;

use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::dictionary::Dictionary;
use crate::errors::SolverError;
use crate::init_logger;
use crate::puzzle::PuzzleBoard;
use crate::puzzle_word::PuzzleWord;

/// Set up the panic hook and logging. Call once after the module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("wasm module initialized");
}

fn engine_error(e: SolverError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

#[derive(Serialize)]
struct WasmWord<'a> {
    word: &'a str,
    /// One `[x, y]` pair per letter, in spelling order.
    path: Vec<[u8; 2]>,
}

fn word_to_js(word: &PuzzleWord) -> Result<JsValue, JsValue> {
    let mirror = WasmWord {
        word: word.word(),
        path: word.path().iter().map(|c| [c.x, c.y]).collect(),
    };
    to_value(&mirror).map_err(|e| JsValue::from_str(&format!("serialization error: {e}")))
}

/// JS-facing board handle wrapping the engine facade.
#[wasm_bindgen(js_name = PuzzleBoard)]
pub struct WasmBoard {
    inner: PuzzleBoard,
}

#[wasm_bindgen(js_class = PuzzleBoard)]
impl WasmBoard {
    /// `words`: string[] dictionary; `width`/`height` default to 6x8.
    #[wasm_bindgen(constructor)]
    pub fn new(
        words: JsValue,
        width: Option<usize>,
        height: Option<usize>,
    ) -> Result<WasmBoard, JsValue> {
        let words: Vec<String> = from_value(words)
            .map_err(|e| JsValue::from_str(&format!("words must be an array of strings: {e}")))?;
        let dict = Rc::new(Dictionary::new(words));
        let inner = PuzzleBoard::with_size(
            dict,
            width.unwrap_or(DEFAULT_WIDTH),
            height.unwrap_or(DEFAULT_HEIGHT),
        )
        .map_err(engine_error)?;
        Ok(WasmBoard { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> usize {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn set_board(&mut self, text: &str) -> Result<(), JsValue> {
        self.inner.set_board(text).map_err(engine_error)
    }

    pub fn set_used(&mut self, x: usize, y: usize, flag: bool) -> Result<(), JsValue> {
        self.inner.set_used(x, y, flag).map_err(engine_error)
    }

    pub fn set_hint_coor(&mut self, x: usize, y: usize, flag: bool) -> Result<(), JsValue> {
        self.inner.set_hint_coor(x, y, flag).map_err(engine_error)
    }

    pub fn find_all_words(&mut self) {
        self.inner.find_all_words();
    }

    pub fn find_solution_from_words(&mut self) {
        self.inner.find_solution_from_words();
    }

    pub fn get_hints(&mut self) {
        self.inner.get_hints();
    }

    pub fn get_found_words_amount(&self) -> usize {
        self.inner.found_words_amount()
    }

    pub fn get_found_word(&self, index: usize) -> Result<JsValue, JsValue> {
        let token = self.inner.found_word_token(index).map_err(engine_error)?;
        let word = self.inner.word(token).map_err(engine_error)?;
        word_to_js(word)
    }

    pub fn get_solution_amount(&self) -> usize {
        self.inner.solution_amount()
    }

    /// One solution as JSON text, e.g. `"[0, 3, 7]"`: indices into the
    /// found-word collection current at solve time.
    pub fn get_solution(&self, index: usize) -> Result<String, JsValue> {
        self.inner.solution_json(index).map_err(engine_error)
    }

    pub fn get_hints_amount(&self) -> usize {
        self.inner.hints_amount()
    }

    pub fn get_hint(&self, index: usize) -> Result<JsValue, JsValue> {
        let token = self.inner.hint_token(index).map_err(engine_error)?;
        let word = self.inner.word(token).map_err(engine_error)?;
        word_to_js(word)
    }
}
