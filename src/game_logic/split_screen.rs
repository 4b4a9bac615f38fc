use bevy::prelude::*;
use bevy::render::camera::Viewport;
use crate::game_logic::PlayerId;

/// A rectangle of the window in physical pixels, origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportRect {
    pub position: UVec2,
    pub size: UVec2,
}

impl ViewportRect {
    pub fn to_viewport(self) -> Viewport {
        Viewport {
            physical_position: self.position,
            physical_size: self.size,
            ..default()
        }
    }
}

/// Player one gets the top half, player two the bottom. Returns `None` when
/// the window is too small to split (e.g. minimised).
pub fn split_viewports(window: UVec2) -> Option<[ViewportRect; 2]> {
    if window.x == 0 || window.y < 2 {
        return None;
    }
    let top = window.y / 2;
    Some([
        ViewportRect {
            position: UVec2::ZERO,
            size: UVec2::new(window.x, top),
        },
        ViewportRect {
            position: UVec2::new(0, top),
            size: UVec2::new(window.x, window.y - top),
        },
    ])
}

pub fn viewport_for(player: PlayerId, window: UVec2) -> Option<ViewportRect> {
    split_viewports(window).map(|rects| rects[player.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_cover_window() {
        let window = UVec2::new(1280, 721);
        let [top, bottom] = split_viewports(window).unwrap();

        assert_eq!(top.position, UVec2::ZERO);
        assert_eq!(top.size.x, 1280);
        assert_eq!(bottom.position.y, top.size.y);
        assert_eq!(top.size.y + bottom.size.y, window.y);
    }

    #[test]
    fn test_player_order() {
        let window = UVec2::new(800, 600);
        assert_eq!(viewport_for(PlayerId::One, window).unwrap().position.y, 0);
        assert_eq!(viewport_for(PlayerId::Two, window).unwrap().position.y, 300);
    }

    #[test]
    fn test_degenerate_window() {
        assert!(split_viewports(UVec2::new(0, 600)).is_none());
        assert!(split_viewports(UVec2::new(800, 1)).is_none());
    }
}
