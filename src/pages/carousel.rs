/// Image position of a card carousel; wraps in both directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// `2/5` style position indicator
    pub fn counter(&self) -> String {
        if self.len == 0 {
            return "0/0".to_string();
        }
        format!("{}/{}", self.index + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_from_first_wraps_to_last() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.index(), 3);
        assert_eq!(c.counter(), "4/4");
    }

    #[test]
    fn n_steps_forward_return_to_start() {
        for start in 0..5 {
            let mut c = Carousel::new(5);
            for _ in 0..start {
                c.next();
            }
            assert_eq!(c.index(), start);

            for _ in 0..5 {
                c.next();
            }
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn single_image_never_moves() {
        let mut c = Carousel::new(1);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
        assert_eq!(c.counter(), "0/0");
    }
}
