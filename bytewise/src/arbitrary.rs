use quickcheck::{Arbitrary, Gen};

use crate::ByteSequence;

impl Arbitrary for ByteSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::from_vec(Vec::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.as_bytes().to_vec().shrink().map(Self::from_vec))
    }
}
