use std::sync::{Arc, Mutex};

use chip8vm::constants::MAX_PROGRAM_SIZE;
use chip8vm::{AudioSink, Chip8, Chip8Error, Tone};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(usize, Tone)>>>, Arc<Mutex<usize>>);

impl Recorder {
    fn tick(&self) {
        *self.1.lock().unwrap() += 1;
    }

    fn record(&self, tone: Tone) {
        let tick = *self.1.lock().unwrap();
        self.0.lock().unwrap().push((tick, tone));
    }

    fn tones(&self) -> Vec<(usize, Tone)> {
        self.0.lock().unwrap().clone()
    }
}

impl AudioSink for Recorder {
    fn start_tone(&mut self) {
        self.record(Tone::Start);
    }

    fn stop_tone(&mut self) {
        self.record(Tone::Stop);
    }
}

fn machine(rom: &[u8]) -> Chip8 {
    let mut chip8 = Chip8::with_seed(0);
    chip8.load_rom(rom).unwrap();
    chip8
}

#[test]
fn test_three_step_program() {
    let mut chip8 = machine(&[0x60, 0x05, 0x70, 0x03, 0xA0, 0x00]);
    for _ in 0..3 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.registers()[0x0], 8);
    assert_eq!(chip8.index(), 0);
    assert_eq!(chip8.pc(), 0x206);
}

#[test]
fn test_largest_rom_loads() {
    let mut chip8 = Chip8::new();
    let rom = vec![0x12; MAX_PROGRAM_SIZE];
    assert_eq!(rom.len(), 3584);
    chip8.load_rom(&rom).unwrap();
    assert_eq!(chip8.memory(0xFFF, 1).unwrap(), &[0x12]);
}

#[test]
fn test_one_byte_too_many_fails() {
    let mut chip8 = Chip8::new();
    let rom = vec![0x12; MAX_PROGRAM_SIZE + 1];
    assert!(matches!(
        chip8.load_rom(&rom),
        Err(Chip8Error::RomTooLarge { .. })
    ));
}

#[test]
fn test_return_after_reset_underflows() {
    let mut chip8 = machine(&[0x00, 0xEE]);
    assert!(matches!(
        chip8.step(),
        Err(Chip8Error::StackUnderflow { pc: 0x200 })
    ));
}

#[test]
fn test_seventeenth_call_overflows() {
    // 2200: call 0x200, forever
    let mut chip8 = machine(&[0x22, 0x00]);
    for depth in 1..=16 {
        chip8.step().unwrap();
        assert_eq!(chip8.stack_depth(), depth);
    }
    assert!(matches!(
        chip8.step(),
        Err(Chip8Error::StackOverflow { pc: 0x200 })
    ));
    assert_eq!(chip8.stack_depth(), 16);
}

#[test]
fn test_call_and_return() {
    // 0x200: call 0x206; 0x202: V1 = 1; 0x204: jump 0x204
    // 0x206: V2 = 2; 0x208: return
    let mut chip8 = machine(&[
        0x22, 0x06, 0x61, 0x01, 0x12, 0x04, 0x62, 0x02, 0x00, 0xEE,
    ]);
    for _ in 0..4 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.registers()[0x1], 1);
    assert_eq!(chip8.registers()[0x2], 2);
    assert_eq!(chip8.stack_depth(), 0);
    assert_eq!(chip8.pc(), 0x204);
}

#[test]
fn test_drawing_twice_erases_and_collides() {
    // I = glyph 8; draw at (V0, V1); draw again
    let mut chip8 = machine(&[0x60, 0x0A, 0x61, 0x06, 0xA0, 0x78, 0xD0, 0x15, 0xD0, 0x15]);
    for _ in 0..4 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.registers()[0xF], 0);
    let drawn: Vec<(usize, usize)> = (0..64)
        .flat_map(|x| (0..32).map(move |y| (x, y)))
        .filter(|(x, y)| chip8.frame().pixel(*x, *y))
        .collect();
    assert!(!drawn.is_empty());

    chip8.step().unwrap();
    assert_eq!(chip8.registers()[0xF], 1);
    assert!(drawn.iter().all(|(x, y)| !chip8.frame().pixel(*x, *y)));
    assert!(chip8.frame().rows().iter().all(|row| *row == 0));
}

#[test]
fn test_wait_for_key_spins_until_pressed() {
    let mut chip8 = machine(&[0xF5, 0x0A, 0x12, 0x02]);
    for _ in 0..10 {
        chip8.step().unwrap();
        assert_eq!(chip8.pc(), 0x200);
    }
    chip8.key_press(0x7);
    chip8.step().unwrap();
    assert_eq!(chip8.registers()[0x5], 0x7);
    assert_eq!(chip8.pc(), 0x202);
}

#[test]
fn test_sound_timer_stops_once_on_third_tick() {
    let recorder = Recorder::default();
    let mut chip8 = Chip8::new().with_audio(Box::new(recorder.clone()));
    chip8.load_rom(&[0x60, 0x03, 0xF0, 0x18]).unwrap();
    chip8.step().unwrap();
    chip8.step().unwrap();
    assert_eq!(chip8.timers().sound(), 3);

    for _ in 0..5 {
        recorder.tick();
        chip8.tick_timers();
    }
    assert_eq!(chip8.timers().sound(), 0);
    assert_eq!(recorder.tones(), [(0, Tone::Start), (3, Tone::Stop)]);
}

#[test]
fn test_bcd_then_load_registers() {
    // V0 = 254; I = 0x300; BCD V0; V0..V2 = mem[I..]
    let mut chip8 = machine(&[0x60, 0xFE, 0xA3, 0x00, 0xF0, 0x33, 0xF2, 0x65]);
    for _ in 0..4 {
        chip8.step().unwrap();
    }
    assert_eq!(chip8.registers()[0x0..0x3], [2, 5, 4]);
    assert_eq!(chip8.memory(0x300, 3).unwrap(), &[2, 5, 4]);
}

#[test]
fn test_invalid_opcode_halts() {
    let mut chip8 = machine(&[0x60, 0x01, 0xFF, 0xFF]);
    chip8.step().unwrap();
    match chip8.step() {
        Err(e @ Chip8Error::InvalidOpcode { .. }) => {
            assert_eq!(e.to_string(), "invalid opcode 0xFFFF at pc 0x202");
        }
        other => panic!("expected an invalid opcode, got {:?}", other),
    }
}

#[test]
fn test_jump_with_offset_out_of_memory() {
    // V0 = 0xFF; jump to V0 + 0xFFF
    let mut chip8 = machine(&[0x60, 0xFF, 0xBF, 0xFF]);
    chip8.step().unwrap();
    chip8.step().unwrap();
    assert_eq!(chip8.pc(), 0x10FE);
    assert!(matches!(
        chip8.step(),
        Err(Chip8Error::MemoryOutOfBounds { .. })
    ));
}
