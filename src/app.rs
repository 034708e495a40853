use anyhow::{Result, anyhow, bail};
use chrono::Local;
use humantext::{
    DisplayMetrics, FrameSnapshot, Humanizer, Language, Rect, TimeUnit, add, convert_dp_to_px,
    format_instant, initials, is_keyboard_open, parse_full_name, rounded_diff_ms,
    transliterate,
};
use log::debug;

use crate::{
    local_config::{ConfigFile, LocalConfig},
    util::{format_distance, parse_instant},
};

const ABSENT: &'static str = "-";

pub struct App {
    local_config: LocalConfig,
}

impl App {
    pub fn new(local_config: LocalConfig) -> Self {
        Self { local_config }
    }

    pub fn handle_ago(
        &self,
        reference: &str,
        target: Option<&str>,
        lang: Option<Language>,
        precise: bool,
    ) -> Result<()> {
        let reference = parse_instant(reference)?;
        let target = match target {
            Some(target) => parse_instant(target)?,
            None => Local::now().fixed_offset(),
        };

        let humanizer = Humanizer::new(self.local_config.locale(lang));
        let diff_ms = rounded_diff_ms(&reference, &target);
        debug!("{reference} -> {target}: {diff_ms}ms");

        println!("{}", humanizer.humanize_ms(diff_ms)?);
        if precise {
            println!("{}", format_distance(diff_ms));
        }

        Ok(())
    }

    pub fn handle_plural(&self, count: u64, unit: TimeUnit, lang: Option<Language>) -> Result<()> {
        let locale = self.local_config.locale(lang);
        println!("{}", locale.pluralize(count, unit)?);
        Ok(())
    }

    pub fn handle_translit(&self, text: &str, divider: Option<&str>) -> Result<()> {
        let divider = divider.unwrap_or_else(|| self.local_config.divider());
        println!("{}", transliterate(text, divider));
        Ok(())
    }

    pub fn handle_name(&self, full_name: Option<&str>) -> Result<()> {
        let (first_name, last_name) = parse_full_name(full_name);
        let initials = initials(first_name.as_deref(), last_name.as_deref());

        println!("first name: {}", first_name.as_deref().unwrap_or(ABSENT));
        println!("last name: {}", last_name.as_deref().unwrap_or(ABSENT));
        println!("initials: {}", initials.as_deref().unwrap_or(ABSENT));
        Ok(())
    }

    pub fn handle_initials(&self, first_name: Option<&str>, last_name: Option<&str>) -> Result<()> {
        let initials = initials(first_name, last_name);
        println!("{}", initials.as_deref().unwrap_or(ABSENT));
        Ok(())
    }

    pub fn handle_shift(
        &self,
        value: i64,
        unit: TimeUnit,
        from: Option<&str>,
        format: Option<&str>,
    ) -> Result<()> {
        let from = match from {
            Some(from) => parse_instant(from)?,
            None => Local::now().fixed_offset(),
        };
        let shifted = add(from, value, unit)
            .ok_or(anyhow!("shifting by {value} {unit}(s) is out of range"))?;

        let pattern = format.unwrap_or_else(|| self.local_config.date_format());
        println!("{}", format_instant(&shifted, pattern)?);
        Ok(())
    }

    pub fn handle_dp(&self, dp: f32, density: f32) -> Result<()> {
        if !(density > 0.0) {
            bail!("density must be positive");
        }
        println!("{}", convert_dp_to_px(&DisplayMetrics { density }, dp));
        Ok(())
    }

    pub fn handle_keyboard(
        &self,
        root_height: i32,
        visible_height: i32,
        density: f32,
        margin_dp: Option<f32>,
    ) -> Result<()> {
        if !(density > 0.0) {
            bail!("density must be positive");
        }
        let probe = FrameSnapshot {
            root_height,
            visible: Rect::new(0, 0, 0, visible_height),
            metrics: DisplayMetrics { density },
        };
        let margin_dp = margin_dp.unwrap_or_else(|| self.local_config.keyboard_margin_dp());

        let state = if is_keyboard_open(&probe, margin_dp) {
            "open"
        } else {
            "closed"
        };
        println!("{state}");
        Ok(())
    }

    pub fn handle_show_config(&self) -> Result<()> {
        let config_file_text = toml::to_string(self.local_config.get_config_file())?;
        println!(
            "# {}",
            self.local_config.get_config_file_path().display()
        );
        print!("{config_file_text}");
        Ok(())
    }

    pub fn handle_init_config(&mut self, force: bool) -> Result<()> {
        let path = self.local_config.get_config_file_path();
        if path.exists() && !force {
            return Err(anyhow!(
                "config file \"{}\" already exists",
                path.display()
            ));
        }

        self.local_config
            .replace_config_file(ConfigFile::populated());
        self.local_config.write_config_file()?;
        println!("{}", self.local_config.get_config_file_path().display());
        Ok(())
    }
}
