mod tests {
    use shiner_composer::color::{
        BLACK, ParseColorError, Rgb, WHITE, add_colors, add_colors_wrapping, blend_colors,
        parse_rgb, scale_color, sub_colors, sub_colors_wrapping,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );

        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_saturating_and_wrapping_arithmetic_differ() {
        let bright = Rgb::new(250, 250, 250);
        assert_eq!(add_colors(bright, bright), WHITE);
        assert_eq!(add_colors_wrapping(bright, bright), Rgb::new(244, 244, 244));

        let low = Rgb::new(10, 20, 30);
        let high = Rgb::new(20, 20, 20);
        assert_eq!(sub_colors(low, high), Rgb::new(0, 0, 10));
        assert_eq!(sub_colors_wrapping(low, high), Rgb::new(246, 0, 10));
    }

    #[test]
    fn test_scale_color() {
        let color = Rgb::new(200, 100, 50);
        assert_eq!(scale_color(color, 0.5), Rgb::new(100, 50, 25));
        assert_eq!(scale_color(color, 1.0), color);
        assert_eq!(scale_color(color, 3.0), color);
        assert_eq!(scale_color(color, 0.0), BLACK);
        assert_eq!(scale_color(color, -1.0), BLACK);
        assert_eq!(scale_color(color, f32::NAN), BLACK);
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("255 100 0"), Ok(Rgb::new(255, 100, 0)));
        assert_eq!(parse_rgb("  1   2 3 "), Ok(Rgb::new(1, 2, 3)));
        assert_eq!(parse_rgb("1 2"), Err(ParseColorError::ComponentCount));
        assert_eq!(parse_rgb("1 2 3 4"), Err(ParseColorError::ComponentCount));
        assert_eq!(parse_rgb("1 2 300"), Err(ParseColorError::InvalidComponent));
        assert_eq!(parse_rgb("red 0 0"), Err(ParseColorError::InvalidComponent));
    }
}
