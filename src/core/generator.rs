/// The script generator: normalized request → composed design document.
///
/// Selects fragments from the content tables with a seeded RNG and renders
/// them into the fixed section templates.

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::core::normalize::{normalize_game_type, normalize_length, normalize_theme};
use crate::core::sections::{self, Section};
use crate::core::template::{render, Bindings, TemplateError};
use crate::schema::record::{GeneratedScript, ScriptMetadata};
use crate::schema::request::GenerationRequest;
use crate::schema::tables::{
    ContentTables, GameTypeInfo, Gender, LengthProfile, LengthTier, ThemeInfo,
};

/// Timestamp format used in artifact names and record metadata.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Timestamp format shown in the document's appendix.
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generates design documents for one normalized request.
/// Built via `ScriptGenerator::builder()`.
pub struct ScriptGenerator<'t> {
    tables: &'t ContentTables,
    game_type: &'t GameTypeInfo,
    theme: &'t ThemeInfo,
    length: LengthTier,
    profile: LengthProfile,
    platform: String,
    style: String,
    seed: Option<u64>,
    generated_at: NaiveDateTime,
    rng: StdRng,
}

/// Builder for constructing a `ScriptGenerator`.
pub struct ScriptGeneratorBuilder<'t> {
    tables: &'t ContentTables,
    request: GenerationRequest,
    seed: Option<u64>,
    generated_at: Option<NaiveDateTime>,
}

impl<'t> ScriptGenerator<'t> {
    pub fn builder(tables: &'t ContentTables) -> ScriptGeneratorBuilder<'t> {
        ScriptGeneratorBuilder {
            tables,
            request: GenerationRequest::default(),
            seed: None,
            generated_at: None,
        }
    }

    pub fn game_type(&self) -> &'t GameTypeInfo {
        self.game_type
    }

    pub fn theme(&self) -> &'t ThemeInfo {
        self.theme
    }

    pub fn length(&self) -> LengthTier {
        self.length
    }

    pub fn chapter_count(&self) -> usize {
        self.profile.chapters
    }

    pub fn npc_count(&self) -> usize {
        self.profile.npcs
    }

    pub fn word_count(&self) -> u32 {
        self.profile.word_count
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// Generation time as `YYYYmmdd_HHMMSS`.
    pub fn timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn metadata(&self) -> ScriptMetadata {
        ScriptMetadata {
            game_type: self.game_type.key.clone(),
            game_type_name: self.game_type.name.clone(),
            theme: self.theme.key.clone(),
            theme_name: self.theme.name.clone(),
            length: self.length,
            word_count: self.profile.word_count,
            platform: self.platform.clone(),
            style: self.style.clone(),
            generated_at: self.timestamp(),
            chapters: self.profile.chapters,
            npcs: self.profile.npcs,
            seed: self.seed,
        }
    }

    /// Generate the full document. The title is drawn once and shared by
    /// every section that shows it.
    pub fn generate(&mut self) -> Result<GeneratedScript, TemplateError> {
        log::info!(
            "Generating {} / {} / {} design document",
            self.game_type.key,
            self.theme.key,
            self.length
        );

        let title = self.generate_title();
        let mut parts = Vec::with_capacity(Section::ALL.len());
        for section in Section::ALL {
            log::debug!("Composing section: {}", section);
            parts.push(self.compose_section(section, &title)?);
        }

        let mut markdown = parts.join("\n\n");
        markdown.push('\n');

        Ok(GeneratedScript {
            title,
            markdown,
            metadata: self.metadata(),
        })
    }

    /// Draw a title from the theme's prefix and suffix pools.
    pub fn generate_title(&mut self) -> String {
        let pool = self.tables.titles.get(&self.theme.key);
        let prefix = pick(&mut self.rng, &pool.prefixes);
        let suffix = pick(&mut self.rng, &pool.suffixes);
        format!("{} {}", prefix, suffix)
    }

    pub fn compose_section(
        &mut self,
        section: Section,
        title: &str,
    ) -> Result<String, TemplateError> {
        match section {
            Section::Overview => self.overview(title),
            Section::WorldSetting => self.world_setting(),
            Section::Characters => self.characters(),
            Section::PlotOutline => self.plot_outline(),
            Section::DialogueSample => render(sections::DIALOGUE_SAMPLE, &Bindings::new()),
            Section::LevelDesign => self.level_design(),
            Section::Systems => render(sections::SYSTEMS, &Bindings::new()),
            Section::Appendix => self.appendix(title),
        }
    }

    fn overview(&mut self, title: &str) -> Result<String, TemplateError> {
        let pitch = pick(&mut self.rng, self.tables.plots.get(&self.game_type.key));

        let bindings = Bindings::new()
            .with("title", title)
            .with("game_type_name", &self.game_type.name)
            .with("game_type_description", &self.game_type.description)
            .with("theme_name", &self.theme.name)
            .with("theme_style", &self.theme.style)
            .with("style", &self.style)
            .with("pitch", pitch)
            .with("platform", &self.platform)
            .with("chapters", self.profile.chapters)
            .with("npcs", self.profile.npcs)
            .with("word_count", self.profile.word_count);
        render(sections::OVERVIEW, &bindings)
    }

    fn world_setting(&self) -> Result<String, TemplateError> {
        let lore: String = self
            .tables
            .world_lore
            .get(&self.theme.key)
            .iter()
            .map(|line| format!("\n{}", line))
            .collect();

        let bindings = Bindings::new()
            .with("theme_name", &self.theme.name)
            .with("theme_style", &self.theme.style)
            .with("lore", lore);
        render(sections::WORLD_SETTING, &bindings)
    }

    fn characters(&mut self) -> Result<String, TemplateError> {
        let names = self.tables.character_names.get(&self.theme.key);
        let plot = pick(&mut self.rng, self.tables.plots.get(&self.game_type.key));
        let background = plot.split_once(": ").map_or(plot, |(_, rest)| rest);
        let hero_name = pick(&mut self.rng, names.names(Gender::Male));

        let mut out = render(
            sections::CHARACTERS_HEADER,
            &Bindings::new()
                .with("hero_name", hero_name)
                .with("hero_background", background),
        )?;

        let roles = &self.tables.npc_roles[..self.profile.npcs.min(self.tables.npc_roles.len())];
        for (i, role) in roles.iter().enumerate() {
            let name = pick(&mut self.rng, names.names(role.gender));
            out.push_str(&render(
                sections::NPC_ENTRY,
                &Bindings::new()
                    .with("index", i + 1)
                    .with("name", name)
                    .with("role", &role.role)
                    .with("personality", &role.personality),
            )?);
        }

        let branches: Vec<String> = roles
            .iter()
            .enumerate()
            .map(|(i, role)| {
                let connector = if i + 1 == roles.len() { "└──" } else { "├──" };
                format!("      {} {} ({})", connector, role.role, role.descriptor)
            })
            .collect();
        out.push_str(&render(
            sections::RELATIONSHIP_MAP,
            &Bindings::new().with("branches", branches.join("\n")),
        )?);

        Ok(out)
    }

    fn plot_outline(&self) -> Result<String, TemplateError> {
        let mut out = render(sections::PLOT_HEADER, &Bindings::new())?;

        let chapter_count = self.profile.chapters.min(self.tables.chapter_names.len());
        for (i, chapter_name) in self.tables.chapter_names[..chapter_count].iter().enumerate() {
            out.push_str(&render(
                sections::CHAPTER_BLOCK,
                &Bindings::new()
                    .with("number", i + 1)
                    .with("chapter_name", chapter_name)
                    .with("boss", self.boss_for_chapter(i + 1)),
            )?);
        }

        out.push_str(&render(sections::PLOT_FOOTER, &Bindings::new())?);
        Ok(out)
    }

    /// Bosses cycle through the boss table by chapter number (1-based).
    fn boss_for_chapter(&self, chapter: usize) -> &str {
        let bosses = &self.tables.boss_types;
        if bosses.is_empty() {
            return "";
        }
        &bosses[(chapter - 1) % bosses.len()]
    }

    fn level_design(&self) -> Result<String, TemplateError> {
        let mut out = render(sections::LEVEL_DESIGN, &Bindings::new())?;
        if self.length != LengthTier::Short {
            out.push_str(&render(sections::LEVEL_HIDDEN_RUINS, &Bindings::new())?);
        }
        Ok(out)
    }

    fn appendix(&self, title: &str) -> Result<String, TemplateError> {
        let bindings = Bindings::new()
            .with("title", title)
            .with(
                "generated_at",
                self.generated_at.format(DISPLAY_TIME_FORMAT),
            )
            .with("word_count", self.profile.word_count)
            .with("chapters", self.profile.chapters)
            .with("npcs", self.profile.npcs);
        render(sections::APPENDIX, &bindings)
    }
}

/// Uniform choice from a pool. Tables are validated non-empty on load.
fn pick<'a>(rng: &mut StdRng, pool: &'a [String]) -> &'a str {
    pool.choose(rng).map(String::as_str).unwrap_or_default()
}

impl<'t> ScriptGeneratorBuilder<'t> {
    pub fn game_type(mut self, game_type: &str) -> Self {
        self.request.game_type = game_type.to_string();
        self
    }

    pub fn theme(mut self, theme: &str) -> Self {
        self.request.theme = theme.to_string();
        self
    }

    pub fn length(mut self, length: &str) -> Self {
        self.request.length = length.to_string();
        self
    }

    pub fn platform(mut self, platform: &str) -> Self {
        self.request.platform = platform.to_string();
        self
    }

    pub fn style(mut self, style: &str) -> Self {
        self.request.style = style.to_string();
        self
    }

    /// Take every selection parameter from a request.
    pub fn request(mut self, request: &GenerationRequest) -> Self {
        self.request = request.clone();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix the generation time instead of reading the clock.
    pub fn generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// Normalize the request and build the generator.
    pub fn build(self) -> ScriptGenerator<'t> {
        let tables = self.tables;
        let game_type = normalize_game_type(tables, &self.request.game_type);
        let theme = normalize_theme(tables, &self.request.theme, game_type);
        let length = normalize_length(&self.request.length);

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        ScriptGenerator {
            tables,
            game_type,
            theme,
            length,
            profile: tables.length_profile(length),
            platform: self.request.platform,
            style: self.request.style,
            seed: self.seed,
            generated_at: self
                .generated_at
                .unwrap_or_else(|| Local::now().naive_local()),
            rng,
        }
    }
}
