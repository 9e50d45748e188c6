use folio_core::{SceneConfig, Section, SectionIndex};

/// Nominal viewport height used to turn the field of view into a CSS perspective.
const NOMINAL_VIEWPORT_PX: f64 = 800.0;

/// Where the scene sits for one section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePose {
    pub offset_x_pct: f64,
    pub rotate_y_deg: f64,
    pub scale: f64,
}

impl ScenePose {
    #[must_use]
    pub fn for_section(section: Section) -> Self {
        match section {
            Section::About => Self {
                offset_x_pct: 0.0,
                rotate_y_deg: 0.0,
                scale: 1.0,
            },
            Section::Skills => Self {
                offset_x_pct: 25.0,
                rotate_y_deg: -30.0,
                scale: 0.8,
            },
            Section::Projects => Self {
                offset_x_pct: -25.0,
                rotate_y_deg: 30.0,
                scale: 0.6,
            },
            Section::Contact => Self {
                offset_x_pct: 0.0,
                rotate_y_deg: 180.0,
                scale: 0.9,
            },
        }
    }

    #[must_use]
    pub fn transform(&self) -> String {
        format!(
            "translateX({}%) rotateY({}deg) scale({})",
            self.offset_x_pct, self.rotate_y_deg, self.scale
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageVm {
    pub section: usize,
    pub background: String,
    pub perspective_px: f64,
    pub camera_transform: String,
    pub scene_transform: String,
    pub shadows: bool,
}

impl StageVm {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "background: {}; perspective: {:.0}px;",
            self.background, self.perspective_px
        )
    }
}

#[must_use]
pub fn map_stage(scene: &SceneConfig, index: SectionIndex) -> StageVm {
    let [x, y, z] = scene.camera_position.map(f64::from);
    let elevation = y.atan2(x.hypot(z)).to_degrees();
    let azimuth = x.atan2(z).to_degrees();
    let half_fov = f64::from(scene.fov).to_radians() / 2.0;

    let pose = ScenePose::for_section(Section::from_index(index).unwrap_or(Section::About));

    StageVm {
        section: index.value(),
        background: scene.background.clone(),
        perspective_px: (NOMINAL_VIEWPORT_PX / 2.0) / half_fov.tan(),
        camera_transform: format!("rotateX({:.1}deg) rotateY({:.1}deg)", -elevation, -azimuth),
        scene_transform: pose.transform(),
        shadows: scene.shadows,
    }
}
