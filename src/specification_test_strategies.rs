use proptest::prelude::*;
use crate::{Advantage, RollSpecification, Sign};


pub(crate) fn sign_strategy() -> impl Strategy<Value = Sign> {
    prop_oneof![Just(Sign::Plus), Just(Sign::Minus)]
}

pub(crate) fn advantage_strategy() -> impl Strategy<Value = Advantage> {
    prop_oneof![
        Just(Advantage::None),
        Just(Advantage::Advantage),
        Just(Advantage::Disadvantage),
    ]
}

pub(crate) fn modifier_strategy() -> impl Strategy<Value = Option<(Sign, u16)>> {
    prop::option::of((sign_strategy(), 1..=100u16))
}

pub(crate) fn plain_specification_strategy() -> impl Strategy<Value = RollSpecification> {
    (1..=20u16, 1..=100u16, modifier_strategy())
        .prop_map(|(quantity, sides, modifier)| {
            let mut builder = RollSpecification::builder(sides).quantity(quantity);
            if let Some((sign, magnitude)) = modifier {
                builder = builder.modifier(sign, magnitude);
            }

            builder.build().unwrap()
        })
}

pub(crate) fn specification_strategy() -> impl Strategy<Value = RollSpecification> {
    (plain_specification_strategy(), advantage_strategy())
        .prop_map(|(spec, advantage)| spec.with_advantage(advantage))
}
