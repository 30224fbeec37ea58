// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use brand_portal::ui::design_tokens::{palette, sizing, spacing, typography};
    use brand_portal::ui::styles::{button, container};
    use brand_portal::ui::theming::ThemeMode;
    use iced::widget::button::Status;
    use iced::{Background, Theme};

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [
                Status::Active,
                Status::Hovered,
                Status::Pressed,
                Status::Disabled,
            ] {
                let _ = button::primary(&theme, status);
                let _ = button::secondary(&theme, status);
            }
            let _ = container::panel(&theme);
            let _ = container::table_header(&theme);
            let _ = container::image_placeholder(&theme);
        }
    }

    #[test]
    fn disabled_buttons_look_the_same_regardless_of_role() {
        let theme = Theme::Dark;
        let primary = button::primary(&theme, Status::Disabled);
        let secondary = button::secondary(&theme, Status::Disabled);

        assert_eq!(primary.background, secondary.background);
        assert_eq!(primary.text_color, secondary.text_color);
    }

    #[test]
    fn primary_button_uses_brand_color() {
        let style = button::primary(&Theme::Light, Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn form_fits_inside_the_minimum_window() {
        let min_width = brand_portal::app::MIN_WINDOW_WIDTH as f32;
        assert!(sizing::FORM_WIDTH + 2.0 * spacing::LG < min_width);
        assert!(typography::TITLE_LG > typography::BODY);
    }

    #[test]
    fn explicit_theme_modes_resolve_to_matching_themes() {
        assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
    }
}
