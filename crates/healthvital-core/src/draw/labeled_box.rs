//! A rectangle with a label centered inside it.

use crate::{
    draw::{Drawable, LayeredOutput, Rectangle, Text},
    geometry::{Point, Size},
};

/// A service box: a [`Rectangle`] with a [`Text`] label centered on it.
///
/// The label is not clipped; callers shrink the label's font beforehand
/// (see [`TextDefinition::shrink_to_fit`](crate::draw::TextDefinition::shrink_to_fit)).
#[derive(Debug, Clone)]
pub struct LabeledBox<'a> {
    rectangle: Rectangle<'a>,
    label: Text<'a>,
}

impl<'a> LabeledBox<'a> {
    pub fn new(rectangle: Rectangle<'a>, label: Text<'a>) -> Self {
        Self { rectangle, label }
    }

    pub fn label(&self) -> &Text<'a> {
        &self.label
    }
}

impl Drawable for LabeledBox<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = self.rectangle.render_to_layers(position);
        output.merge(self.label.render_to_layers(position));
        output
    }

    fn size(&self) -> Size {
        self.rectangle.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RectangleDefinition, TextDefinition};

    #[test]
    fn test_labeled_box_renders_box_and_label() {
        let rect_def = RectangleDefinition::new();
        let text_def = TextDefinition::new();
        let labeled = LabeledBox::new(
            Rectangle::new(&rect_def, Size::new(96.0, 30.0)),
            Text::new(&text_def, "DynamoDB"),
        );

        assert_eq!(labeled.size(), Size::new(96.0, 30.0));
        assert_eq!(labeled.label().content(), "DynamoDB");

        let nodes = labeled.render_to_layers(Point::new(50.0, 50.0)).render();
        // Service group followed by text group
        assert_eq!(nodes.len(), 2);
    }
}
