//! Document sections and the fixed prose templates they are rendered from.

use std::fmt;

/// The sections of a design document, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Overview,
    WorldSetting,
    Characters,
    PlotOutline,
    DialogueSample,
    LevelDesign,
    Systems,
    Appendix,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Self::Overview,
        Self::WorldSetting,
        Self::Characters,
        Self::PlotOutline,
        Self::DialogueSample,
        Self::LevelDesign,
        Self::Systems,
        Self::Appendix,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::WorldSetting => "world_setting",
            Self::Characters => "characters",
            Self::PlotOutline => "plot_outline",
            Self::DialogueSample => "dialogue_sample",
            Self::LevelDesign => "level_design",
            Self::Systems => "systems",
            Self::Appendix => "appendix",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) const OVERVIEW: &str = r#"# {title} - Game Design Document

## 1. Game Overview

**Title:** {title}

**Genre:** {game_type_name} - {game_type_description}

**Theme:** {theme_name} ({theme_style})

**Style:** {style}

**Core Gameplay Pitch:**
{pitch}

**Target Audience:**
- Age: 16-35
- Preference: story-driven games
- Platform: {platform}

**Rating:**
- T (Teen) - suitable for players aged 16 and up
- Content: fantasy violence, mild language

**Scope:**
- Main chapters: {chapters}
- Major NPCs: {npcs}
- Target length: about {word_count} words"#;

pub(crate) const WORLD_SETTING: &str = r#"## 2. World Setting

### 2.1 Background

**Era:** {theme_name} world

The setting is {theme_style}.{lore}

### 2.2 World Rules

**Core rules:**
- The power system is left for players to explore and uncover
- Several factions coexist, bound by tangled allegiances
- Major decisions shift the course of the world"#;

pub(crate) const CHARACTERS_HEADER: &str = r#"## 3. Characters

### 3.1 Protagonist

**Name:** {hero_name}

**Background:**
{hero_background}

**Personality:**
- Unshakeable resolve
- Restless curiosity about the unknown
- Willing to sacrifice for others

**Starting abilities:**
- Basic combat skills
- A latent gift that awakens as the game progresses

### 3.2 Major NPCs"#;

pub(crate) const NPC_ENTRY: &str = r#"

**NPC-{index}: {name}**
- **Role:** {role}
- **Trait:** {personality}
- **Background:** Bound closely to the protagonist's fate"#;

pub(crate) const RELATIONSHIP_MAP: &str = r#"

### 3.3 Relationship Map

```
    Protagonist
{branches}
```"#;

pub(crate) const PLOT_HEADER: &str = r#"## 4. Plot Outline

### 4.1 Prologue: Fate Begins

The protagonist's ordinary life is shattered when a mysterious event pushes them toward the unknown.
Guided by a mentor, the protagonist sets out on a journey that will change their fate.

### 4.2 Main Story"#;

pub(crate) const CHAPTER_BLOCK: &str = r#"

#### Chapter {number}: {chapter_name}

**Synopsis:**
The protagonist faces new trials along the road. "{chapter_name}" marks a major turning point in the story.

**Key events:**
- Uncover a vital clue
- Encounter a formidable enemy
- Make a consequential choice
- Gain a surge of power

**Chapter boss:**

**Name:** {boss}
**Traits:** Immense power and a unique combat mechanic
**Weakness:** Left for the player to discover
**Drops:** Key items and equipment"#;

pub(crate) const PLOT_FOOTER: &str = r#"

### 4.3 Side Quests

1. **The Missing Heirloom** - Help a villager recover a precious lost item
2. **Hidden Treasure** - Follow scattered clues to a legendary hoard
3. **Old Grudges** - Settle a long-running feud between two families
4. **A Stranger's Request** - Accept a stranger's commission and uncover the truth behind it

### 4.4 Endings

**True ending:**
Gather every clue, make the right choices, uncover the truth of the world, and earn a real new beginning.

**Normal ending:**
Complete the main story but miss key information; the world is saved, but regrets remain.

**Bad ending:**
Make the wrong choice at a critical moment, with irreversible consequences."#;

pub(crate) const DIALOGUE_SAMPLE: &str = r#"## 5. Dialogue Sample

### 5.1 Opening Scene

**[Scene: a village square at sunset]**

**Mentor:**
"You came at last. I have waited a long time for you."

**Protagonist:**
"Who are you? Why were you looking for me?"

**Mentor:**
"Those questions will be answered in time. For now you need to know only one thing: the world needs you."

**Protagonist:**
"Me? An ordinary person? That's absurd."

**Mentor:**
"Blood speaks, and fate calls. Come with me. There is little time left."

### 5.2 Branching Choices

**[Key decision point]**

The mentor holds out a hand, waiting for your answer.

**[Option A: Accept the invitation]**
> The protagonist sets out on the adventure and the main story advances

**[Option B: Refuse the invitation]**
> The mentor leaves a mysterious item behind; a crisis later forces the protagonist onto the road

**[Option C: Ask for more details]**
> The mentor reveals part of the story, but insists the rest must be discovered firsthand"#;

pub(crate) const LEVEL_DESIGN: &str = r#"## 6. Level Design

### Level 1: Tutorial Area

**Description:**
A relatively safe starting area where players learn the basic controls.

**Content:**
- Basic combat tutorial
- Movement and interaction tutorial
- Guided NPC conversations
- Simple gathering quests

**Rewards:**
- Starting equipment
- Basic consumables
- In-game currency

### Level 2: The First Danger Zone

**Description:**
Hostile wilderness where players meet real enemies for the first time.

**Content:**
- Moderate combat encounters
- Simple puzzle elements
- The first boss fight
- Major story progression

**Rewards:**
- Key story item
- New skill unlock
- Equipment upgrade"#;

pub(crate) const LEVEL_HIDDEN_RUINS: &str = r#"

### Level 3: Hidden Ruins

**Description:**
Mysterious ruins left by an ancient civilization, full of traps and secrets.

**Content:**
- Complex puzzles
- Branching paths
- Hidden treasure chests
- Mid-game boss fight

**Rewards:**
- Powerful equipment
- Rare items
- Fragments of world lore"#;

pub(crate) const SYSTEMS: &str = r#"## 7. Systems Design

### 7.1 Combat

**Core mechanics:**
- Turn-based or real-time combat, depending on the game type
- Skill chaining
- Elemental strengths and weaknesses
- Party coordination

**Progression:**
- Experience and levels
- Skill point allocation
- Equipment enhancement
- Talent trees

### 7.2 Economy

**Currencies:**
- Gold: basic currency
- Gems: premium currency
- Reputation: special currency

**Sources:**
- Quest rewards
- Loot
- Trading
- Exploration

### 7.3 Quests

**Quest types:**
- Main quests: drive the story forward
- Side quests: deepen the world
- Daily quests: repeatable
- Hidden quests: unlocked by special triggers

### 7.4 Achievements

**Categories:**
- Story achievements
- Combat achievements
- Exploration achievements
- Collection achievements"#;

pub(crate) const APPENDIX: &str = r#"## 8. Appendix

### 8.1 Glossary

- **Core Power:** a special form of energy that exists in the world
- **Ancient Civilization:** an advanced civilization that predates the present world
- **Seers:** a secretive group able to glimpse the future

### 8.2 References

This design draws on elements from:
- Core mechanics of classic RPGs
- Story design of modern narrative games
- A blend of Japanese and Western RPG styles

### 8.3 Future Expansion

**DLC plans:**
- New character storylines
- Additional chapters
- Challenge modes
- Co-op multiplayer

**Sequel potential:**
- The ending leaves hooks for a sequel
- A prequel or side story could follow

---

**Document Info**
- Title: {title}
- Document version: 1.0
- Generated at: {generated_at}
- Target length: about {word_count} words
- Chapters: {chapters}
- Major NPCs: {npcs}
- Author: Game Script Generator

*This document was generated automatically by the game script generator and is intended as a starting point only.*"#;
