//! Rendering interface
//!
//! The simulation never draws pixels itself. It reports what should be on
//! screen through `Renderer`, and the host maps those calls onto whatever
//! backend it has (canvas, GPU, terminal, or a log).

use serde::{Deserialize, Serialize};

/// Sprites the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    Body,
    /// Obstacle hanging from above (drawn anchored at its bottom edge)
    UpperObstacle,
    /// Obstacle standing below (drawn anchored at its top edge)
    LowerObstacle,
}

/// Things that can be tinted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Entity {
    Body,
}

/// Packed 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint(pub u32);

impl Tint {
    /// Body after a crash
    pub const HIT: Tint = Tint(0xff0000);
    /// No tint
    pub const NONE: Tint = Tint(0xffffff);
}

/// Draw calls the simulation makes every frame
pub trait Renderer {
    fn draw_sprite(&mut self, id: SpriteId, x: f32, y: f32);
    fn draw_text(&mut self, x: f32, y: f32, content: &str);
    fn set_tint(&mut self, entity: Entity, tint: Tint);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Sprite { id: SpriteId, x: f32, y: f32 },
    Text { x: f32, y: f32, content: String },
    Tint { entity: Entity, tint: Tint },
}

/// Renderer that keeps the calls of the current frame
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text lines drawn this frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Number of sprites of one kind drawn this frame
    pub fn sprite_count(&self, id: SpriteId) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Sprite { id: s, .. } if *s == id))
            .count()
    }

    /// Last tint applied to an entity this frame
    pub fn tint_of(&self, entity: Entity) -> Option<Tint> {
        self.commands.iter().rev().find_map(|c| match c {
            DrawCommand::Tint { entity: e, tint } if *e == entity => Some(*tint),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn draw_sprite(&mut self, id: SpriteId, x: f32, y: f32) {
        self.commands.push(DrawCommand::Sprite { id, x, y });
    }

    fn draw_text(&mut self, x: f32, y: f32, content: &str) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            content: content.to_string(),
        });
    }

    fn set_tint(&mut self, entity: Entity, tint: Tint) {
        self.commands.push(DrawCommand::Tint { entity, tint });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_renderer_queries() {
        let mut r = RecordingRenderer::new();
        r.draw_sprite(SpriteId::Background, 0.0, 0.0);
        r.draw_sprite(SpriteId::UpperObstacle, 10.0, 100.0);
        r.draw_sprite(SpriteId::UpperObstacle, 510.0, 120.0);
        r.draw_text(16.0, 12.0, "Score: 3");
        r.set_tint(Entity::Body, Tint::NONE);
        r.set_tint(Entity::Body, Tint::HIT);

        assert_eq!(r.sprite_count(SpriteId::UpperObstacle), 2);
        assert_eq!(r.sprite_count(SpriteId::Body), 0);
        assert_eq!(r.texts(), vec!["Score: 3"]);
        assert_eq!(r.tint_of(Entity::Body), Some(Tint::HIT));

        r.clear();
        assert!(r.commands.is_empty());
    }
}
