//! Scene descriptions.
//!
//! A scene file describes an image as a tree of generators, transformers and
//! combinators, written in YAML or JSON. Loading a scene checks the
//! parameters the image core leaves to its callers (zero tile sizes, zero
//! scale factors) and builds the corresponding [`Image`].
//!
//! # Example
//!
//! ```yaml
//! name: target
//! view:
//!   width: 64
//!   height: 64
//!   pixel_size: 0.5
//! image:
//!   type: cond
//!   region: { type: circle, center: [0, 0], radius: 10, inner: true, outer: false }
//!   this_way: { type: checker, size: 4, this_way: black, that_way: white }
//!   that_way: { type: constant, value: "#336699" }
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::combinators;
use crate::error::{FimageError, Result};
use crate::generators;
use crate::image::{BaseImage, Blend, Image, ImageValue, Region};
use crate::render::Viewport;
use crate::transform;
use crate::types::{Colour, Point, Vector};

/// File suffixes recognised as scene files.
pub const SCENE_SUFFIXES: &[&str] = &[".scene.yaml", ".scene.yml", ".scene.json"];

/// A complete scene: an image plus optional naming and framing.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    /// Scene name, used for output file names.
    #[serde(default)]
    pub name: Option<String>,

    /// Window onto the plane; callers fall back to their own default.
    #[serde(default)]
    pub view: Option<Viewport>,

    /// The image tree.
    pub image: Node<Colour>,
}

/// One node of an image tree producing values of type `T`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node<T> {
    Constant {
        value: T,
    },
    Circle {
        center: Point,
        radius: f64,
        inner: T,
        outer: T,
    },
    Checker {
        size: f64,
        this_way: T,
        that_way: T,
    },
    PolarChecker {
        size: f64,
        sectors: u32,
        this_way: T,
        that_way: T,
    },
    Rings {
        #[serde(default)]
        center: Point,
        width: f64,
        this_way: T,
        that_way: T,
    },
    VerticalStripe {
        width: f64,
        this_way: T,
        that_way: T,
    },
    Rotate {
        degrees: f64,
        source: Box<Node<T>>,
    },
    Translate {
        by: Vector,
        source: Box<Node<T>>,
    },
    Scale {
        factor: f64,
        source: Box<Node<T>>,
    },
    Cond {
        region: Box<Node<bool>>,
        this_way: Box<Node<T>>,
        that_way: Box<Node<T>>,
    },
    Lerp {
        blend: Box<Node<f64>>,
        this_way: Box<Node<T>>,
        that_way: Box<Node<T>>,
    },
    Darken {
        source: Box<Node<T>>,
        blend: Box<Node<f64>>,
    },
    Lighten {
        source: Box<Node<T>>,
        blend: Box<Node<f64>>,
    },
    Complement {
        source: Box<Node<bool>>,
    },
    Union {
        left: Box<Node<bool>>,
        right: Box<Node<bool>>,
    },
    Intersection {
        left: Box<Node<bool>>,
        right: Box<Node<bool>>,
    },
    Difference {
        left: Box<Node<bool>>,
        right: Box<Node<bool>>,
    },
}

/// Value types a scene tree can produce.
///
/// Blending and region algebra only make sense for some value types; the
/// defaults reject them with a scene error.
pub trait SceneValue: ImageValue {
    /// Human-readable name used in error messages.
    const KIND: &'static str;

    fn lerp(_blend: Blend, _a: BaseImage<Self>, _b: BaseImage<Self>) -> Result<BaseImage<Self>> {
        Err(unsupported("lerp", Self::KIND))
    }

    fn darken(_image: BaseImage<Self>, _blend: Blend) -> Result<BaseImage<Self>> {
        Err(unsupported("darken", Self::KIND))
    }

    fn lighten(_image: BaseImage<Self>, _blend: Blend) -> Result<BaseImage<Self>> {
        Err(unsupported("lighten", Self::KIND))
    }

    fn from_region(_region: Region) -> Result<BaseImage<Self>> {
        Err(unsupported("region algebra", Self::KIND))
    }
}

impl SceneValue for Colour {
    const KIND: &'static str = "colour";

    fn lerp(blend: Blend, a: Image, b: Image) -> Result<Image> {
        Ok(combinators::lerp(blend, a, b))
    }

    fn darken(image: Image, blend: Blend) -> Result<Image> {
        Ok(combinators::darken(image, blend))
    }

    fn lighten(image: Image, blend: Blend) -> Result<Image> {
        Ok(combinators::lighten(image, blend))
    }
}

impl SceneValue for f64 {
    const KIND: &'static str = "blend";

    fn lerp(blend: Blend, a: Blend, b: Blend) -> Result<Blend> {
        Ok(combinators::lerp(blend, a, b))
    }
}

impl SceneValue for bool {
    const KIND: &'static str = "region";

    fn from_region(region: Region) -> Result<Region> {
        Ok(region)
    }
}

fn unsupported(operation: &str, kind: &str) -> FimageError {
    FimageError::Scene {
        message: format!("`{}` cannot produce a {} image", operation, kind),
        help: Some("Blending works on colour and blend images; region algebra only on regions".to_string()),
    }
}

impl<T: SceneValue> Node<T> {
    /// Build the image described by this node.
    pub fn build(&self) -> Result<BaseImage<T>> {
        let image = match self {
            Node::Constant { value } => generators::constant(value.clone()),

            Node::Circle {
                center,
                radius,
                inner,
                outer,
            } => {
                require_finite("circle", "radius", *radius)?;
                generators::circle(*center, *radius, inner.clone(), outer.clone())
            }

            Node::Checker {
                size,
                this_way,
                that_way,
            } => {
                require_nonzero("checker", "size", *size)?;
                generators::checker(*size, this_way.clone(), that_way.clone())
            }

            Node::PolarChecker {
                size,
                sectors,
                this_way,
                that_way,
            } => {
                require_nonzero("polar_checker", "size", *size)?;
                if *sectors == 0 {
                    return Err(FimageError::Scene {
                        message: "polar_checker needs at least one sector".to_string(),
                        help: Some("Set `sectors` to a positive integer".to_string()),
                    });
                }
                generators::polar_checker(*size, *sectors, this_way.clone(), that_way.clone())
            }

            Node::Rings {
                center,
                width,
                this_way,
                that_way,
            } => {
                require_nonzero("rings", "width", *width)?;
                generators::rings(*center, *width, this_way.clone(), that_way.clone())
            }

            Node::VerticalStripe {
                width,
                this_way,
                that_way,
            } => {
                require_finite("vertical_stripe", "width", *width)?;
                generators::vertical_stripe(*width, this_way.clone(), that_way.clone())
            }

            Node::Rotate { degrees, source } => {
                require_finite("rotate", "degrees", *degrees)?;
                transform::rotate(source.build()?, degrees.to_radians())
            }

            Node::Translate { by, source } => {
                require_finite("translate", "by", by.first)?;
                require_finite("translate", "by", by.second)?;
                transform::translate(source.build()?, *by)
            }

            Node::Scale { factor, source } => {
                require_nonzero("scale", "factor", *factor)?;
                transform::scale(source.build()?, *factor)
            }

            Node::Cond {
                region,
                this_way,
                that_way,
            } => combinators::cond(region.build()?, this_way.build()?, that_way.build()?),

            Node::Lerp {
                blend,
                this_way,
                that_way,
            } => T::lerp(blend.build()?, this_way.build()?, that_way.build()?)?,

            Node::Darken { source, blend } => T::darken(source.build()?, blend.build()?)?,

            Node::Lighten { source, blend } => T::lighten(source.build()?, blend.build()?)?,

            Node::Complement { source } => T::from_region(combinators::complement(source.build()?))?,

            Node::Union { left, right } => {
                T::from_region(combinators::union(left.build()?, right.build()?))?
            }

            Node::Intersection { left, right } => {
                T::from_region(combinators::intersection(left.build()?, right.build()?))?
            }

            Node::Difference { left, right } => {
                T::from_region(combinators::difference(left.build()?, right.build()?))?
            }
        };

        Ok(image)
    }
}

fn require_finite(node: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FimageError::Scene {
            message: format!("{}: `{}` must be a finite number, got {}", node, field, value),
            help: None,
        })
    }
}

fn require_nonzero(node: &str, field: &str, value: f64) -> Result<()> {
    require_finite(node, field, value)?;
    if value == 0.0 {
        return Err(FimageError::Scene {
            message: format!("{}: `{}` must be nonzero", node, field),
            help: Some("A zero size would divide the plane by zero".to_string()),
        });
    }
    Ok(())
}

impl Scene {
    /// Load a scene from a `.scene.yaml`, `.scene.yml` or `.scene.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FimageError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read scene: {}", e),
        })?;

        let mut scene = if path.extension().is_some_and(|ext| ext == "json") {
            Self::parse_json(&content)?
        } else {
            Self::parse_yaml(&content)?
        };

        if scene.name.is_none() {
            scene.name = scene_stem(path);
        }

        Ok(scene)
    }

    /// Parse a scene from YAML.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| FimageError::Parse {
            message: format!("Invalid scene: {}", e),
            help: Some("Quote hex colours in YAML: \"#336699\"".to_string()),
        })
    }

    /// Parse a scene from JSON.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| FimageError::Parse {
            message: format!("Invalid scene: {}", e),
            help: None,
        })
    }

    /// Build the scene's image.
    pub fn build(&self) -> Result<Image> {
        self.image.build()
    }

    /// The scene's own viewport, or `fallback` when it has none.
    pub fn viewport_or(&self, fallback: Viewport) -> Viewport {
        self.view.unwrap_or(fallback)
    }

    /// Name for output files.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("scene")
    }
}

/// Check whether a path names a scene file.
pub fn is_scene_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| SCENE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// `dir/target.scene.yaml` -> `target`.
fn scene_stem(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    SCENE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .or_else(|| path.file_stem().and_then(|stem| stem.to_str()))
        .map(str::to_string)
}
