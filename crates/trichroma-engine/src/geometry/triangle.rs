/// Number of vertices drawn each frame.
pub const VERTEX_COUNT: u32 = 3;

/// Clip-space positions (x, y, z).
pub const TRIANGLE_POSITIONS: [[f32; 3]; VERTEX_COUNT as usize] = [
    [-1.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
];

/// Per-vertex colors (r, g, b): red, green, blue.
pub const TRIANGLE_COLORS: [[f32; 3]; VERTEX_COUNT as usize] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projected_positions_keep_vertex_order() {
        let xy: Vec<(f32, f32)> = TRIANGLE_POSITIONS.iter().map(|p| (p[0], p[1])).collect();
        assert_eq!(xy, vec![(-1.0, -1.0), (0.0, 1.0), (1.0, -1.0)]);
    }

    #[test]
    fn vertex_colors_are_red_green_blue() {
        assert_eq!(TRIANGLE_COLORS[0], [1.0, 0.0, 0.0]);
        assert_eq!(TRIANGLE_COLORS[1], [0.0, 1.0, 0.0]);
        assert_eq!(TRIANGLE_COLORS[2], [0.0, 0.0, 1.0]);
    }

    #[test]
    fn each_array_is_36_bytes() {
        assert_eq!(bytemuck::cast_slice::<_, u8>(&TRIANGLE_POSITIONS).len(), 36);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&TRIANGLE_COLORS).len(), 36);
    }
}
