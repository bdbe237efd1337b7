/// Node shapes understood by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Box3d,
    House,
    Triangle,
    Diamond,
    Octagon,
    Egg,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Box3d => "box3d",
            Shape::House => "house",
            Shape::Triangle => "triangle",
            Shape::Diamond => "diamond",
            Shape::Octagon => "octagon",
            Shape::Egg => "egg",
        }
    }
}

/// Display attributes of one graph node. Unset attributes fall back to the
/// explicit defaults here (white fill, box3d shape) at registration time.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeAttrs {
    pub label: String,
    pub fillcolor: String,
    pub shape: Shape,
}

impl Default for NodeAttrs {
    fn default() -> Self {
        Self {
            label: String::new(),
            fillcolor: "white".to_string(),
            shape: Shape::Box3d,
        }
    }
}

impl NodeAttrs {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn fill(mut self, color: impl Into<String>) -> Self {
        self.fillcolor = color.into();
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_merge_at_registration() {
        let attrs = NodeAttrs::new("Assign").fill("yellow");
        assert_eq!(attrs.label, "Assign");
        assert_eq!(attrs.fillcolor, "yellow");
        assert_eq!(attrs.shape, Shape::Box3d);
    }
}
