pub trait Element {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn set_text(&self, text: &str);

    fn set_class(&self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

pub trait Document {
    type Element: Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
}

impl<D: Document + ?Sized> Document for &D {
    type Element = D::Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        (**self).element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Self::Element> {
        (**self).elements_by_class(class)
    }
}
