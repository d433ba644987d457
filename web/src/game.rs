use bingo_core::{
    BoardConfig, BoardGenerator, Card, Coord, GameState, GeneratorSeed, RandomBoardGenerator,
    SchemaVersion, Session, SessionConfig,
};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::elements::ElementRegistry;
use crate::storage::BrowserSessionStore;
use crate::utils::js_random_fill;

/// Board bound to the page's session storage, driven from JavaScript.
#[wasm_bindgen]
pub struct BingoGame {
    card: Card,
    size: Coord,
    game: GameState,
    session: Session<BrowserSessionStore>,
    elements: ElementRegistry,
}

#[wasm_bindgen]
impl BingoGame {
    /// Restores the board saved in this session or deals a new one from `card_json`.
    ///
    /// A stored board from another card or of another size is replaced. A stored board that can't be
    /// decoded is reported as an error, call [`BingoGame::clear_session`] to start over.
    #[wasm_bindgen(constructor)]
    pub fn new(card_json: &str, size: Coord) -> Result<BingoGame, JsError> {
        let card: Card = serde_json::from_str(card_json)?;
        let config = SessionConfig {
            legacy_tile_id: card.id.clone(),
            ..Default::default()
        };
        let session = Session::with_scope(BrowserSessionStore::detect(), config);

        let game = match session.load_game()? {
            Some(mut game) if game.tile_id() == Some(card.id.as_str()) && game.size() == size => {
                log::info!("Restored {}x{} board from session", size, size);
                game.recompute_winning();
                game
            }
            _ => deal(&card, size)?,
        };

        let mut bingo = Self {
            card,
            size,
            game,
            session,
            elements: ElementRegistry::new(),
        };
        bingo.persist();
        Ok(bingo)
    }

    /// Wipes the session storage of this page without needing a game.
    pub fn clear_session() -> Result<(), JsError> {
        let mut session =
            Session::with_scope(BrowserSessionStore::detect(), SessionConfig::default());
        session.clear()?;
        Ok(())
    }

    pub fn size(&self) -> Coord {
        self.game.size()
    }

    pub fn tile_id(&self) -> Option<String> {
        self.game.tile_id().map(String::from)
    }

    pub fn label(&self, row: Coord, col: Coord) -> Result<String, JsError> {
        Ok(self.game.cell_at((row, col))?.label.clone())
    }

    pub fn is_selected(&self, row: Coord, col: Coord) -> Result<bool, JsError> {
        Ok(self.game.cell_at((row, col))?.selected)
    }

    pub fn is_winning(&self, row: Coord, col: Coord) -> Result<bool, JsError> {
        Ok(self.game.cell_at((row, col))?.winning)
    }

    /// Lines completed through this cell, as JSON.
    pub fn winning_directions(&self, row: Coord, col: Coord) -> Result<String, JsError> {
        let cell = self.game.cell_at((row, col))?;
        Ok(serde_json::to_string(&cell.winning_directions)?)
    }

    pub fn has_won(&self) -> bool {
        self.game.grid().iter().any(|cell| cell.winning)
    }

    /// Flips the selection of a cell, updates the win state and saves. Returns the new selection.
    pub fn toggle(&mut self, row: Coord, col: Coord) -> Result<bool, JsError> {
        let outcome = self.game.toggle_selected((row, col))?;
        log::debug!("toggle ({}, {}): {:?}", row, col, outcome);
        self.game.recompute_winning();
        self.persist();
        Ok(outcome.is_selected())
    }

    pub fn attach_element(&mut self, row: Coord, col: Coord, element: Element) -> Result<(), JsError> {
        self.game.grid().validate_coords((row, col))?;
        let handle = self.elements.register(element);
        if let Some(previous) = self.game.attach_element((row, col), handle)? {
            self.elements.release(previous);
        }
        Ok(())
    }

    pub fn element(&self, row: Coord, col: Coord) -> Option<Element> {
        let handle = self.game.cell_at((row, col)).ok()?.element?;
        self.elements.get(handle).cloned()
    }

    /// Drops every element, for when the page tears down the board view.
    pub fn detach_elements(&mut self) {
        self.elements.clear();
        self.game.detach_elements();
    }

    /// Clears the session and deals a fresh board from the same card.
    pub fn reset(&mut self) -> Result<(), JsError> {
        self.session.clear()?;
        self.elements.clear();
        self.game = deal(&self.card, self.size)?;
        self.persist();
        Ok(())
    }
}

impl BingoGame {
    fn persist(&mut self) {
        if let Err(err) = self.session.save_game(&self.game) {
            log::error!("Could not save board to session storage: {:?}", err);
        }
    }
}

fn deal(card: &Card, size: Coord) -> bingo_core::Result<GameState> {
    let mut seed = GeneratorSeed::default();
    js_random_fill(seed.as_mut());
    RandomBoardGenerator::from_seed(seed)
        .generate(BoardConfig::new(size, SchemaVersion::Tagged), card)
}
