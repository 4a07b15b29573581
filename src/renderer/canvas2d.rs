//! Canvas 2D renderer and DOM HUD (web only)

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlImageElement};

use super::{HudSink, RenderSink, game_over_lines, hud_lines};
use crate::sim::{CatKind, GameState};

/// A sprite that may or may not have finished loading
struct Sprite {
    image: HtmlImageElement,
    /// Drawn instead while the image isn't ready
    fallback: &'static str,
}

impl Sprite {
    fn load(src: &str, fallback: &'static str) -> Result<Self, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(src);
        Ok(Self { image, fallback })
    }

    fn is_ready(&self) -> bool {
        self.image.complete() && self.image.natural_width() > 0
    }
}

/// Draws the game onto a `<canvas>` with the 2D context
pub struct Canvas2dRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    player: Sprite,
    cat: Sprite,
    bad_cat: Sprite,
    fat_cat: Sprite,
}

impl Canvas2dRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            player: Sprite::load("assets/player.png", "#3a6ea5")?,
            cat: Sprite::load("assets/cat.png", "#e0a96d")?,
            bad_cat: Sprite::load("assets/badcat.png", "#8b1e3f")?,
            fat_cat: Sprite::load("assets/fatcat.png", "#f2c14e")?,
        })
    }

    fn draw_sprite(&self, sprite: &Sprite, x: f32, y: f32, w: f32, h: f32) -> Result<(), JsValue> {
        let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
        if sprite.is_ready() {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&sprite.image, x, y, w, h)
        } else {
            self.ctx.set_fill_style_str(sprite.fallback);
            self.ctx.fill_rect(x, y, w, h);
            Ok(())
        }
    }

    fn sprite_for(&self, kind: CatKind) -> &Sprite {
        match kind {
            CatKind::Normal => &self.cat,
            CatKind::Bad => &self.bad_cat,
            CatKind::Fat => &self.fat_cat,
        }
    }
}

impl RenderSink for Canvas2dRenderer {
    type Error = JsValue;

    fn render(&mut self, state: &GameState, _now_ms: f64) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);

        for cat in &state.cats {
            self.draw_sprite(self.sprite_for(cat.kind), cat.pos.x, cat.pos.y, cat.size.x, cat.size.y)?;
        }

        let player = &state.player;
        self.draw_sprite(&self.player, player.pos.x, player.pos.y, player.size.x, player.size.y)?;

        // Floating score text
        ctx.set_font("bold 20px Arial");
        ctx.set_text_align("center");
        for text in &state.floating_texts {
            ctx.set_fill_style_str(&text.color.to_css(text.alpha));
            ctx.fill_text(&text.label, text.pos.x as f64, text.pos.y as f64)?;
        }

        // HUD
        ctx.set_text_align("left");
        ctx.set_fill_style_str("black");
        ctx.set_font("20px Arial");
        let [score, time] = hud_lines(state);
        ctx.fill_text(&score, 20.0, 30.0)?;
        ctx.fill_text(&time, 20.0, 60.0)?;

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;

        if let Some(notice) = &state.notice {
            ctx.set_text_align("center");
            ctx.set_fill_style_str("#ff6f00");
            ctx.set_font("bold 36px Arial");
            ctx.fill_text(&notice.text, cx, 100.0)?;
        }

        if let Some([title, final_score]) = game_over_lines(state) {
            ctx.set_fill_style_str("rgba(0,0,0,0.5)");
            ctx.fill_rect(0.0, 0.0, self.width, self.height);

            ctx.set_text_align("center");
            ctx.set_fill_style_str("white");
            ctx.set_font("48px Arial");
            ctx.fill_text(&title, cx, cy - 10.0)?;
            ctx.set_font("32px Arial");
            ctx.fill_text(&final_score, cx, cy + 40.0)?;
        }

        Ok(())
    }
}

/// Mirrors HUD values into `#score`, `#timeLeft` and `#highScore`
pub struct DomHud {
    score: Option<Element>,
    time_left: Option<Element>,
    high_score: Option<Element>,
}

impl DomHud {
    pub fn new(document: &Document) -> Self {
        let find = |id: &str| {
            let el = document.get_element_by_id(id);
            if el.is_none() {
                log::warn!("HUD element #{} not found", id);
            }
            el
        };

        Self {
            score: find("score"),
            time_left: find("timeLeft"),
            high_score: find("highScore"),
        }
    }
}

impl HudSink for DomHud {
    fn set_score(&mut self, score: i64) {
        if let Some(el) = &self.score {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    fn set_time_left(&mut self, secs: u32) {
        if let Some(el) = &self.time_left {
            el.set_text_content(Some(&secs.to_string()));
        }
    }

    fn set_high_score(&mut self, score: i64) {
        if let Some(el) = &self.high_score {
            el.set_text_content(Some(&score.to_string()));
        }
    }
}
