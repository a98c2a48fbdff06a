use std::cmp;

use crate::{
    any::difficulty::skills::Skill,
    catch::{attributes::CatchDifficultyAttributes, error::DifficultyResult},
};

use super::{
    object::CatchDifficultyObject, skills::movement::Movement, CatchDifficulty, DifficultyValues,
};

/// Gradually calculate the difficulty attributes of an osu!catch object
/// stream.
///
/// Note that this struct implements [`Iterator`].
/// On every call of [`Iterator::next`], the stream's next object will be
/// processed and the [`CatchDifficultyAttributes`] will be updated and
/// returned.
///
/// # Example
///
/// ```
/// use rosu_catch_diff::catch::{CatchDifficulty, CatchGradualDifficulty, PalpableObject};
///
/// let objects: Vec<_> = (0..10)
///     .map(|i| PalpableObject::new((i % 2) as f32 * 200.0, f64::from(i) * 150.0))
///     .collect();
///
/// let difficulty = CatchDifficulty::new().clock_rate(1.5);
/// let diff_objects = difficulty.create_difficulty_objects(&objects)?;
/// let mut iter = CatchGradualDifficulty::new(&difficulty, &diff_objects)?;
///
/// // the difficulty after the first object
/// let attrs1 = iter.next();
/// // ... after the second object
/// let attrs2 = iter.next();
///
/// // Remaining objects
/// for attrs in iter {
///     // ...
/// }
/// # Ok::<_, rosu_catch_diff::catch::DifficultyError>(())
/// ```
pub struct CatchGradualDifficulty {
    pub(crate) idx: usize,
    diff_objects: Box<[CatchDifficultyObject]>,
    movement: Skill<Movement>,
}

impl CatchGradualDifficulty {
    /// Create a new difficulty attributes iterator for osu!catch object
    /// streams.
    pub fn new(
        difficulty: &CatchDifficulty,
        diff_objects: &[CatchDifficultyObject],
    ) -> DifficultyResult<Self> {
        let movement = Movement::new(
            difficulty.get_half_catcher_width(),
            difficulty.get_clock_rate(),
        )?;

        let take = cmp::min(difficulty.get_passed_objects(), diff_objects.len());

        Ok(Self {
            idx: 0,
            diff_objects: diff_objects[..take].into(),
            movement: Skill::new(movement),
        })
    }

    fn attributes(&self) -> CatchDifficultyAttributes {
        let mut attrs = CatchDifficultyAttributes {
            n_objects: self.idx as u32,
            ..Default::default()
        };

        DifficultyValues::eval(&mut attrs, self.movement.difficulty_value());

        attrs
    }
}

impl Iterator for CatchGradualDifficulty {
    type Item = CatchDifficultyAttributes;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.diff_objects.get(self.idx)?;
        self.movement.process(curr);
        self.idx += 1;

        Some(self.attributes())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();

        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let take = cmp::min(n, self.len());

        for curr in self.diff_objects[self.idx..].iter().take(take) {
            self.movement.process(curr);
        }

        self.idx += take;

        if take < n {
            return None;
        }

        self.next()
    }
}

impl ExactSizeIterator for CatchGradualDifficulty {
    fn len(&self) -> usize {
        self.diff_objects.len() - self.idx
    }
}

#[cfg(test)]
mod tests {
    use crate::catch::object::PalpableObject;

    use super::*;

    fn diff_objects(difficulty: &CatchDifficulty) -> Box<[CatchDifficultyObject]> {
        let objects: Vec<_> = (0..40)
            .map(|i| {
                let x = ((i * 97) % 512) as f32;

                PalpableObject::new(x, f64::from(i) * 130.0)
            })
            .collect();

        difficulty.create_difficulty_objects(&objects).unwrap()
    }

    #[test]
    fn empty() {
        let mut gradual = CatchGradualDifficulty::new(&CatchDifficulty::new(), &[]).unwrap();

        assert_eq!(gradual.len(), 0);
        assert!(gradual.next().is_none());
    }

    #[test]
    fn next_and_nth() {
        let difficulty = CatchDifficulty::new().clock_rate(1.25);
        let diff_objects = diff_objects(&difficulty);

        let mut gradual = CatchGradualDifficulty::new(&difficulty, &diff_objects).unwrap();
        let mut gradual_2nd = CatchGradualDifficulty::new(&difficulty, &diff_objects).unwrap();
        let mut gradual_3rd = CatchGradualDifficulty::new(&difficulty, &diff_objects).unwrap();

        for i in 1.. {
            let Some(next_gradual) = gradual.next() else {
                assert_eq!(i, 41);
                assert!(gradual_2nd.last().is_none()); // 40 % 2 == 0
                assert!(gradual_3rd.last().is_some()); // 40 % 3 == 1
                break;
            };

            if i % 2 == 0 {
                let next_gradual_2nd = gradual_2nd.nth(1).unwrap();
                assert_eq!(next_gradual, next_gradual_2nd);
            }

            if i % 3 == 0 {
                let next_gradual_3rd = gradual_3rd.nth(2).unwrap();
                assert_eq!(next_gradual, next_gradual_3rd);
            }

            let expected = difficulty
                .clone()
                .passed_objects(i)
                .calculate(&diff_objects)
                .unwrap();

            assert_eq!(next_gradual, expected);
        }
    }

    #[test]
    fn nth_past_end() {
        let difficulty = CatchDifficulty::new();
        let diff_objects = diff_objects(&difficulty);

        let mut gradual = CatchGradualDifficulty::new(&difficulty, &diff_objects[..5]).unwrap();
        assert!(gradual.nth(10).is_none());
        assert_eq!(gradual.len(), 0);
        assert!(gradual.next().is_none());

        // skipping exactly to the end is exhaustion as well
        let mut gradual = CatchGradualDifficulty::new(&difficulty, &diff_objects[..5]).unwrap();
        assert!(gradual.nth(5).is_none());

        let mut gradual = CatchGradualDifficulty::new(&difficulty, &diff_objects[..5]).unwrap();
        let last = gradual.nth(4);
        let expected = difficulty
            .clone()
            .passed_objects(5)
            .calculate(&diff_objects)
            .unwrap();

        assert_eq!(last, Some(expected));
        assert!(gradual.next().is_none());
    }

    #[test]
    fn respects_passed_objects() {
        let difficulty = CatchDifficulty::new().passed_objects(5);
        let diff_objects = diff_objects(&difficulty);

        let gradual = CatchGradualDifficulty::new(&difficulty, &diff_objects).unwrap();

        assert_eq!(gradual.len(), 5);
        assert_eq!(gradual.last().map(|attrs| attrs.n_objects), Some(5));
    }
}
