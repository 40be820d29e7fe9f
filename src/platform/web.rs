//! Browser engine: DOM sprites, `<audio>` playback, arcade bodies
//!
//! Every entity is an absolutely positioned element inside `#game`. Bodies
//! are integrated by the shared `ArcadeWorld`.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::assets::{AssetKind, AssetManifest};
use crate::audio::AudioManager;
use crate::consts::*;
use crate::engine::{ArcadeWorld, Engine};
use crate::sim::{AnimationKey, Overlay, SessionEvent, SessionState, Sound};

pub struct WebEngine {
    world: ArcadeWorld,
    pub audio: AudioManager,
    manifest: AssetManifest,
    player_el: Element,
    warp_el: Element,
    platform_els: Vec<Element>,
    score_el: Element,
    overlay_el: Element,
    animation: AnimationKey,
    /// Playback time of the current clip (s)
    anim_time: f32,
    anims_paused: bool,
}

fn create(document: &Document, parent: &Element, tag: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    parent.append_child(&el)?;
    Ok(el)
}

fn place(el: &Element, pos: glam::Vec2, size: glam::Vec2, extra: &str) {
    let style = format!(
        "position:absolute;left:{:.1}px;top:{:.1}px;width:{}px;height:{}px;{}",
        pos.x - size.x / 2.0,
        pos.y - size.y / 2.0,
        size.x,
        size.y,
        extra
    );
    let _ = el.set_attribute("style", &style);
}

impl WebEngine {
    /// Build the scene under `#game` (created if absent)
    pub fn new(
        document: &Document,
        manifest: AssetManifest,
        audio: AudioManager,
        state: &SessionState,
    ) -> Result<Self, JsValue> {
        let root = match document.get_element_by_id("game") {
            Some(el) => el,
            None => {
                let body = document.body().ok_or("no body")?;
                let el = document.create_element("div")?;
                el.set_id("game");
                body.append_child(&el)?;
                el
            }
        };
        root.set_inner_html("");
        let _ = root.set_attribute(
            "style",
            &format!(
                "position:relative;overflow:hidden;width:{VIEWPORT_WIDTH}px;height:{VIEWPORT_HEIGHT}px;background:{BACKGROUND_COLOR};"
            ),
        );

        let image_path = |key: &str| {
            manifest
                .entries
                .iter()
                .find(|e| e.kind == AssetKind::Image && e.key == key)
                .map(|e| e.path)
                .unwrap_or_default()
        };

        let warp_el = create(document, &root, "img")?;
        warp_el.set_attribute("src", image_path("warp"))?;

        let mut platform_els = Vec::with_capacity(state.platforms.len());
        for _ in &state.platforms {
            let el = create(document, &root, "img")?;
            el.set_attribute("src", image_path("platform-danger"))?;
            platform_els.push(el);
        }

        let player_el = create(document, &root, "div")?;
        let score_el = create(document, &root, "div")?;
        let _ = score_el.set_attribute(
            "style",
            "position:absolute;left:16px;top:16px;color:#ffffff;font:24px Arial;",
        );
        let overlay_el = create(document, &root, "div")?;

        let mut engine = Self {
            world: ArcadeWorld::new(),
            audio,
            manifest,
            player_el,
            warp_el,
            platform_els,
            score_el,
            overlay_el,
            animation: state.player.animation,
            anim_time: 0.0,
            anims_paused: false,
        };
        engine.reset(state);
        Ok(engine)
    }

    /// Push entity positions and the current sprite frame to the DOM
    pub fn render(&self, state: &SessionState) {
        place(
            &self.warp_el,
            state.warp.pos,
            WARP_SIZE,
            &format!("transform:rotate({:.3}rad);", state.warp.rotation),
        );

        for (el, platform) in self.platform_els.iter().zip(&state.platforms) {
            place(el, platform.pos, PLATFORM_SIZE, "");
        }

        let sheet = &self.manifest.sprite_sheet;
        let frame = self
            .manifest
            .clip(self.animation)
            .map(|clip| clip.frame_at(self.anim_time))
            .unwrap_or(0);
        place(
            &self.player_el,
            state.player.pos,
            glam::Vec2::new(sheet.frame_width as f32, sheet.frame_height as f32),
            &format!(
                "background:url({}) -{}px 0 no-repeat;",
                sheet.path,
                frame * sheet.frame_width
            ),
        );
    }
}

impl Engine for WebEngine {
    fn play_sound(&mut self, sound: Sound) {
        self.audio.play(sound);
    }

    fn stop_sound(&mut self, sound: Sound) {
        self.audio.stop(sound);
    }

    fn is_playing(&self, sound: Sound) -> bool {
        self.audio.is_playing(sound)
    }

    fn play_animation(&mut self, key: AnimationKey) {
        self.animation = key;
        self.anim_time = 0.0;
    }

    fn set_score_text(&mut self, text: &str) {
        self.score_el.set_text_content(Some(text));
    }

    fn show_overlay(&mut self, overlay: &Overlay) {
        let (pos, style) = match overlay {
            Overlay::Text { pos, text } => {
                self.overlay_el.set_text_content(Some(text.as_str()));
                (pos, "white-space:pre;color:#ffffff;font:32px Arial;")
            }
            Overlay::Image { pos, key } => {
                let path = self
                    .manifest
                    .entries
                    .iter()
                    .find(|e| e.key == key.as_str())
                    .map(|e| e.path)
                    .unwrap_or_default();
                self.overlay_el.set_inner_html(&format!("<img src=\"{path}\">"));
                (pos, "")
            }
        };
        let _ = self.overlay_el.set_attribute(
            "style",
            &format!("position:absolute;left:{}px;top:{}px;{}", pos.x, pos.y, style),
        );
    }

    fn pause_all(&mut self) {
        self.world.pause();
        self.anims_paused = true;
    }

    fn resume_all(&mut self) {
        self.world.resume();
        self.anims_paused = false;
    }

    fn reset(&mut self, state: &SessionState) {
        self.world.reset();
        self.anims_paused = false;
        self.animation = state.player.animation;
        self.anim_time = 0.0;
        self.overlay_el.set_inner_html("");
        let _ = self.overlay_el.set_attribute("style", "display:none;");
        self.score_el
            .set_text_content(Some(state.score_display.text.as_str()));
    }

    fn step(&mut self, state: &mut SessionState, dt: f32) -> Vec<SessionEvent> {
        if !self.anims_paused {
            self.anim_time += dt;
        }
        self.world.step(state, dt)
    }
}
