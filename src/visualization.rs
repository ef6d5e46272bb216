//! 3D viewer for stepping through a cross solution using kiss3d.

use kiss3d::prelude::*;

use rubiks::geometry::{stickers, Coord};
use rubiks::{Face, FaceletState, Move, Solution};

/// Returns the sticker color for a face letter.
fn sticker_color(face: Face) -> Color {
    match face {
        Face::U => Color::new(1.0, 1.0, 1.0, 1.0),    // white
        Face::L => Color::new(0.1, 0.6, 0.25, 1.0),   // green
        Face::F => Color::new(0.75, 0.05, 0.1, 1.0),  // red
        Face::R => Color::new(0.05, 0.25, 0.75, 1.0), // blue
        Face::D => Color::new(1.0, 0.85, 0.1, 1.0),   // yellow
        Face::B => Color::new(1.0, 0.45, 0.05, 1.0),  // orange
    }
}

/// Converts cube coordinates (x right, y front, z up) to world space, where
/// Y points up and Z points towards the default camera.
fn to_world((x, y, z): Coord) -> Vec3 {
    Vec3::new(x as f32, z as f32, y as f32)
}

/// Builds cubelet bodies plus one thin colored slab per sticker.
///
/// Cubelet coordinates run 0..=2 and are centered on the origin by
/// offsetting them by -1.
fn build_scene(scene: &mut SceneNode3d, state: &FaceletState) -> Vec<SceneNode3d> {
    /// Size of each cubelet body (below 1.0 for visible gaps).
    const CUBELET_SIZE: f32 = 0.95;
    /// Edge length of a sticker.
    const STICKER_SIZE: f32 = 0.82;
    /// Depth of a sticker along its normal.
    const STICKER_THICKNESS: f32 = 0.04;

    let mut nodes = Vec::new();
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                let node = scene
                    .add_cube(CUBELET_SIZE, CUBELET_SIZE, CUBELET_SIZE)
                    .set_color(Color::new(0.05, 0.05, 0.05, 1.0))
                    .set_position(to_world((x - 1, y - 1, z - 1)));
                nodes.push(node);
            }
        }
    }

    for sticker in stickers() {
        let (x, y, z) = sticker.cubelet;
        let center = to_world((x - 1, y - 1, z - 1));
        let normal = to_world(sticker.normal);
        // flatten the slab along the normal axis
        let size = Vec3::splat(STICKER_SIZE) - normal.abs() * (STICKER_SIZE - STICKER_THICKNESS);
        let node = scene
            .add_cube(size.x, size.y, size.z)
            .set_color(sticker_color(state.facelet(sticker.facelet)))
            .set_position(center + normal * (CUBELET_SIZE / 2.0));
        nodes.push(node);
    }

    nodes
}

/// Position within a solution, moving one move or one phase at a time.
struct Playback {
    start: FaceletState,
    state: FaceletState,
    /// Every move of the solution paired with the index of its phase.
    steps: Vec<(Move, usize)>,
    phase_names: Vec<String>,
    /// Number of moves applied to `start`.
    position: usize,
}

impl Playback {
    fn new(start: FaceletState, solution: &Solution) -> Self {
        let steps = solution
            .phases
            .iter()
            .enumerate()
            .flat_map(|(index, phase)| phase.moves.iter().map(move |&mv| (mv, index)))
            .collect();
        Self {
            state: start.clone(),
            start,
            steps,
            phase_names: solution.phases.iter().map(|p| p.name.clone()).collect(),
            position: 0,
        }
    }

    fn forward(&mut self) -> bool {
        match self.steps.get(self.position) {
            Some(&(mv, _)) => {
                self.state.apply(mv);
                self.position += 1;
                true
            }
            None => false,
        }
    }

    fn back(&mut self) -> bool {
        if self.position == 0 {
            return false;
        }
        self.position -= 1;
        self.state.apply(self.steps[self.position].0.inverse());
        true
    }

    /// Plays the rest of the phase the next move belongs to.
    fn to_phase_end(&mut self) -> bool {
        let Some(&(_, phase)) = self.steps.get(self.position) else {
            return false;
        };
        while self.steps.get(self.position).is_some_and(|&(_, p)| p == phase) {
            self.forward();
        }
        true
    }

    /// Rewinds to the start of the phase the last applied move belongs to.
    fn to_phase_start(&mut self) -> bool {
        let Some(phase) = self.current_phase() else {
            return false;
        };
        while self.current_phase() == Some(phase) {
            self.back();
        }
        true
    }

    fn reset(&mut self) -> bool {
        let moved = self.position != 0;
        self.state = self.start.clone();
        self.position = 0;
        moved
    }

    fn current_phase(&self) -> Option<usize> {
        self.position
            .checked_sub(1)
            .map(|last| self.steps[last].1)
    }

    fn title(&self) -> String {
        let phase = match self.current_phase() {
            Some(index) => self.phase_names[index].as_str(),
            None => "Scrambled",
        };
        format!(
            "Move {}/{} - {} - [Left/Right] step, [Up/Down] phase, [R] reset",
            self.position,
            self.steps.len(),
            phase
        )
    }
}

/// Displays the solution, starting from the scrambled cube.
pub fn display(start: FaceletState, solution: &Solution) {
    pollster::block_on(display_async(start, solution));
}

async fn display_async(start: FaceletState, solution: &Solution) {
    let mut playback = Playback::new(start, solution);

    let mut window = Window::new(&playback.title()).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(9.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    let mut nodes = build_scene(&mut scene, &playback.state);
    // whether the scene needs to be rebuilt (after the state changed)
    let mut needs_rebuild = false;

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    let moved = match key {
                        Key::Right => playback.forward(),
                        Key::Left => playback.back(),
                        Key::Up => playback.to_phase_end(),
                        Key::Down => playback.to_phase_start(),
                        Key::R => playback.reset(),
                        _ => false,
                    };
                    needs_rebuild |= moved;
                }
            }
        }

        if needs_rebuild {
            for mut node in nodes.drain(..) {
                node.remove();
            }
            nodes = build_scene(&mut scene, &playback.state);
            window.set_title(&playback.title());
            needs_rebuild = false;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use rubiks::moves::parse_moves;
    use rubiks::solver::Phase;

    use super::*;

    fn sample() -> Playback {
        let mut start = FaceletState::solved();
        start.apply_all(&parse_moves("F R").unwrap());
        let solution = Solution {
            phases: vec![
                Phase {
                    name: "first".to_string(),
                    moves: parse_moves("R'").unwrap(),
                },
                Phase {
                    name: "empty".to_string(),
                    moves: Vec::new(),
                },
                Phase {
                    name: "second".to_string(),
                    moves: parse_moves("F2 F").unwrap(),
                },
            ],
            state: FaceletState::solved(),
        };
        Playback::new(start, &solution)
    }

    #[test]
    fn test_step_forward_and_back() {
        let mut playback = sample();
        let start = playback.state.clone();
        assert!(!playback.back());
        assert!(playback.forward());
        assert_eq!(playback.position, 1);
        assert!(playback.back());
        assert_eq!(playback.state, start);
    }

    #[test]
    fn test_phase_jumps() {
        let mut playback = sample();
        assert!(playback.to_phase_end());
        assert_eq!(playback.position, 1);
        assert!(playback.to_phase_end());
        assert_eq!(playback.position, 3);
        assert!(playback.state.is_solved());
        assert!(!playback.to_phase_end());

        assert!(playback.to_phase_start());
        assert_eq!(playback.position, 1);
        assert!(playback.to_phase_start());
        assert_eq!(playback.position, 0);
        assert!(!playback.to_phase_start());
    }

    #[test]
    fn test_reset_and_title() {
        let mut playback = sample();
        assert!(playback.title().starts_with("Move 0/3 - Scrambled"));
        playback.forward();
        playback.forward();
        assert!(playback.title().starts_with("Move 2/3 - second"));
        assert!(playback.reset());
        assert_eq!(playback.state, playback.start);
        assert!(!playback.reset());
    }
}
