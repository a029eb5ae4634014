//! Frosted-glass chat panel: SVG displacement map and filter parameters.
//!
//! The panel uses an SVG `<filter id="glass-filter">` as a `backdrop-filter`.
//! Its `<feImage>` points at a displacement map generated here from the
//! panel's current size, and three `<feDisplacementMap>` elements shift the
//! red, green and blue channels by slightly different amounts.

#[cfg(test)]
#[path = "glass_test.rs"]
mod glass_test;

/// Channel read for horizontal displacement.
pub const X_CHANNEL_SELECTOR: &str = "R";
/// Channel read for vertical displacement.
pub const Y_CHANNEL_SELECTOR: &str = "G";
/// Id of the SVG filter referenced by the panel's `backdrop-filter`.
pub const FILTER_ID: &str = "glass-filter";

/// Tunables for the glass effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlassSettings {
    pub border_radius: f64,
    /// Fraction of the shorter side used as the refracting edge.
    pub border_width: f64,
    /// Lightness (percent) of the inner, undistorted area.
    pub brightness: f64,
    pub opacity: f64,
    /// Blur (px) applied to the inner area of the map.
    pub blur: f64,
    /// `stdDeviation` of the filter's Gaussian blur.
    pub displace: f64,
    pub distortion_scale: f64,
    pub red_offset: f64,
    pub green_offset: f64,
    pub blue_offset: f64,
    pub mix_blend_mode: &'static str,
}

impl Default for GlassSettings {
    fn default() -> Self {
        Self {
            border_radius: 20.0,
            border_width: 0.07,
            brightness: 50.0,
            opacity: 0.93,
            blur: 11.0,
            displace: 15.0,
            distortion_scale: -150.0,
            red_offset: 5.0,
            green_offset: 15.0,
            blue_offset: 25.0,
            mix_blend_mode: "screen",
        }
    }
}

/// Color channel handled by one `<feDisplacementMap>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// DOM id of the channel's `<feDisplacementMap>` element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Red => "redChannel",
            Self::Green => "greenChannel",
            Self::Blue => "blueChannel",
        }
    }
}

/// Displacement `scale` for one channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelScale {
    pub channel: Channel,
    pub scale: f64,
}

impl GlassSettings {
    /// Width of the refracting edge for a `width` x `height` panel.
    #[must_use]
    pub fn edge_size(&self, width: f64, height: f64) -> f64 {
        width.min(height) * (self.border_width * 0.5)
    }

    /// Per-channel displacement scales, red first.
    #[must_use]
    pub fn channel_scales(&self) -> [ChannelScale; 3] {
        [
            ChannelScale { channel: Channel::Red, scale: self.distortion_scale + self.red_offset },
            ChannelScale { channel: Channel::Green, scale: self.distortion_scale + self.green_offset },
            ChannelScale { channel: Channel::Blue, scale: self.distortion_scale + self.blue_offset },
        ]
    }

    /// `stdDeviation` for the filter's `<feGaussianBlur>`.
    #[must_use]
    pub fn blur_std_deviation(&self) -> f64 {
        self.displace
    }

    /// SVG displacement map for a panel of the given size.
    ///
    /// A red gradient runs right-to-left and a blue gradient top-to-bottom,
    /// blended with `mix_blend_mode`; a blurred grey rectangle inset by the
    /// edge size keeps the middle of the panel undistorted.
    #[must_use]
    pub fn displacement_map_svg(&self, width: f64, height: f64) -> String {
        let edge = self.edge_size(width, height);
        let radius = self.border_radius;
        let inner_w = width - edge * 2.0;
        let inner_h = height - edge * 2.0;
        format!(
            concat!(
                r#"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
                r#"<defs>"#,
                r##"<linearGradient id="red-grad-dynamic" x1="100%" y1="0%" x2="0%" y2="0%"><stop offset="0%" stop-color="#0000"/><stop offset="100%" stop-color="red"/></linearGradient>"##,
                r##"<linearGradient id="blue-grad-dynamic" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#0000"/><stop offset="100%" stop-color="blue"/></linearGradient>"##,
                r#"</defs>"#,
                r#"<rect x="0" y="0" width="{w}" height="{h}" fill="black"></rect>"#,
                r#"<rect x="0" y="0" width="{w}" height="{h}" rx="{r}" fill="url(#red-grad-dynamic)" />"#,
                r#"<rect x="0" y="0" width="{w}" height="{h}" rx="{r}" fill="url(#blue-grad-dynamic)" style="mix-blend-mode: {blend}" />"#,
                r#"<rect x="{e}" y="{e}" width="{iw}" height="{ih}" rx="{r}" fill="hsl(0 0% {bright}% / {op})" style="filter:blur({blur}px)" />"#,
                r#"</svg>"#,
            ),
            w = width,
            h = height,
            r = radius,
            e = edge,
            iw = inner_w,
            ih = inner_h,
            blend = self.mix_blend_mode,
            bright = self.brightness,
            op = self.opacity,
            blur = self.blur,
        )
    }

    /// [`Self::displacement_map_svg`] as a `data:` URL for `<feImage href>`.
    #[must_use]
    pub fn displacement_map_url(&self, width: f64, height: f64) -> String {
        let svg = self.displacement_map_svg(width, height);
        format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
    }

    /// Hidden `<svg>` holding the `#glass-filter` definition.
    ///
    /// Each channel is displaced by its own scale, isolated with a color
    /// matrix, then the three are screened back together and softened.
    #[must_use]
    pub fn filter_svg(&self, map_url: &str) -> String {
        let [red, green, blue] = self.channel_scales();
        format!(
            concat!(
                r#"<svg class="glass-surface__filter" xmlns="http://www.w3.org/2000/svg" width="0" height="0" aria-hidden="true">"#,
                r#"<defs><filter id="{id}" color-interpolation-filters="sRGB" x="0%" y="0%" width="100%" height="100%">"#,
                r#"<feImage id="feImage" x="0" y="0" width="100%" height="100%" preserveAspectRatio="none" result="map" href="{href}"/>"#,
                r#"<feDisplacementMap id="{rid}" in="SourceGraphic" in2="map" scale="{rs}" xChannelSelector="{xs}" yChannelSelector="{ys}" result="dispRed"/>"#,
                r#"<feColorMatrix in="dispRed" type="matrix" values="1 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0" result="red"/>"#,
                r#"<feDisplacementMap id="{gid}" in="SourceGraphic" in2="map" scale="{gs}" xChannelSelector="{xs}" yChannelSelector="{ys}" result="dispGreen"/>"#,
                r#"<feColorMatrix in="dispGreen" type="matrix" values="0 0 0 0 0 0 1 0 0 0 0 0 0 0 0 0 0 0 1 0" result="green"/>"#,
                r#"<feDisplacementMap id="{bid}" in="SourceGraphic" in2="map" scale="{bs}" xChannelSelector="{xs}" yChannelSelector="{ys}" result="dispBlue"/>"#,
                r#"<feColorMatrix in="dispBlue" type="matrix" values="0 0 0 0 0 0 0 0 0 0 0 0 1 0 0 0 0 0 1 0" result="blue"/>"#,
                r#"<feBlend in="red" in2="green" mode="screen" result="rg"/>"#,
                r#"<feBlend in="rg" in2="blue" mode="screen" result="output"/>"#,
                r#"<feGaussianBlur id="gaussianBlur" in="output" stdDeviation="{sd}"/>"#,
                r#"</filter></defs></svg>"#,
            ),
            id = FILTER_ID,
            href = map_url,
            rid = red.channel.element_id(),
            rs = red.scale,
            gid = green.channel.element_id(),
            gs = green.scale,
            bid = blue.channel.element_id(),
            bs = blue.scale,
            xs = X_CHANNEL_SELECTOR,
            ys = Y_CHANNEL_SELECTOR,
            sd = self.blur_std_deviation(),
        )
    }
}

/// How the panel backdrop is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceMode {
    /// SVG `backdrop-filter` with the displacement map.
    Svg,
    /// Plain blur for engines that cannot use SVG backdrop filters.
    Fallback,
}

impl SurfaceMode {
    /// Pick a mode from the browser's user agent string.
    ///
    /// Safari (without Chrome) and Firefox do not apply SVG filters as a
    /// backdrop filter. `css_accepts_filter` is whether the engine accepted
    /// `backdrop-filter: url(#glass-filter)` as a style value.
    #[must_use]
    pub fn detect(user_agent: &str, css_accepts_filter: bool) -> Self {
        let webkit_only = user_agent.contains("Safari") && !user_agent.contains("Chrome");
        if webkit_only || user_agent.contains("Firefox") || !css_accepts_filter {
            Self::Fallback
        } else {
            Self::Svg
        }
    }

    /// Modifier class added to the panel container.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Svg => "glass-surface--svg",
            Self::Fallback => "glass-surface--fallback",
        }
    }
}
