// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_notice::domain::notice::NoticeCategory;
    use iced_notice::ui::design_tokens::{palette, sizing, spacing};
    use iced_notice::ui::notices::banner;
    use iced_notice::ui::styles::button;
    use iced_notice::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::secondary(&theme, iced::widget::button::Status::Hovered);
        let _ = button::category(palette::PRIMARY_500)(
            &theme,
            iced::widget::button::Status::Pressed,
        );
    }

    #[test]
    fn category_buttons_use_the_banner_accent() {
        let theme = Theme::Light;
        for category in NoticeCategory::ALL {
            let accent = banner::to_color(category.color());
            let style = button::category(accent)(&theme, iced::widget::button::Status::Active);
            assert_eq!(
                style.background,
                Some(iced::Background::Color(accent)),
                "{} button should match its banner",
                category.label()
            );
        }
    }

    #[test]
    fn panel_fits_four_category_buttons() {
        let needed = 4.0 * 48.0 + 3.0 * spacing::XS + 2.0 * spacing::MD;
        assert!(sizing::PANEL_WIDTH >= needed);
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Light.theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.theme(), Theme::Dark);
    }
}
