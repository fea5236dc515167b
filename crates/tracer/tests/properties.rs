use primitive_types::{H160, H256, U256};
use proptest::prelude::*;
use storage_tracer::{
    encoding::word_from_u256,
    testonly::{TestInstruction, TestStorage},
    AccessTracer, FinalExecutionContext, Opcode,
};

fn is_storage_opcode(raw: u8) -> bool {
    raw == 0x54 || raw == 0x55
}

proptest! {
    #[test]
    fn log_length_equals_storage_opcode_count(steps in prop::collection::vec((any::<u8>(), any::<u64>()), 0..64)) {
        let contract = H160::repeat_byte(0x42);
        let state = TestStorage::default();
        let mut tracer = AccessTracer::new();

        for (raw, slot) in &steps {
            // Every instruction gets an operand so storage opcodes always
            // have a slot key to peek at.
            tracer.on_step(
                &TestInstruction::new(Opcode::new(*raw), contract).push(*slot),
                &state,
            );
        }

        let expected = steps.iter().filter(|(raw, _)| is_storage_opcode(*raw)).count();
        let result = tracer.on_result(&FinalExecutionContext::default());
        prop_assert_eq!(result.accesses.len(), expected);
    }

    #[test]
    fn slots_are_recorded_in_execution_order(slots in prop::collection::vec(any::<u64>(), 1..32)) {
        let contract = H160::repeat_byte(0x42);
        let state = TestStorage::default();
        let mut tracer = AccessTracer::new();

        for slot in &slots {
            tracer.on_step(
                &TestInstruction::new(Opcode::SLOAD, contract).push(*slot),
                &state,
            );
        }

        let result = tracer.on_result(&FinalExecutionContext::default());
        let recorded: Vec<_> = result.accesses.iter().map(|r| r.slot).collect();
        let expected: Vec<_> = slots.iter().map(|slot| H256::from_low_u64_be(*slot)).collect();
        prop_assert_eq!(recorded, expected);
    }

    #[test]
    fn operand_width_does_not_affect_the_slot(slot in any::<u64>()) {
        // A u64-sized operand and the full-width word normalize identically.
        let narrow = word_from_u256(U256::from(slot));
        let wide = word_from_u256(U256::from_big_endian(H256::from_low_u64_be(slot).as_bytes()));
        prop_assert_eq!(narrow, wide);
        prop_assert_eq!(narrow, H256::from_low_u64_be(slot));
    }

    #[test]
    fn output_is_passed_through_verbatim(output in prop::collection::vec(any::<u8>(), 0..128)) {
        let tracer = AccessTracer::new();
        let result = tracer.on_result(&FinalExecutionContext::with_output(output.clone()));
        prop_assert_eq!(result.output, output);
    }
}
