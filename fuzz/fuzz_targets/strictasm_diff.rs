#![no_main]

use libfuzzer_sys::fuzz_target;
use sasm::harness::test_one_input;

fuzz_target!(|data: &[u8]| {
    test_one_input(data);
});
