use log::trace;

use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FONT_GLYPH_SIZE, FONT_START, KEY_COUNT};
use crate::error::{Chip8Error, Result};
use crate::opcode::Opcode;
use crate::state::State;

// Every operation runs with pc already pointing at the following instruction.

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.pc = state.pc.wrapping_add(0x2);
    }
}

/// Address of the instruction being run.
fn current_pc(state: &State) -> u16 {
    state.pc.wrapping_sub(0x2)
}

fn invalid(op: u16, state: &State) -> Chip8Error {
    Chip8Error::InvalidOpcode {
        opcode: op,
        pc: current_pc(state),
    }
}

/// clear
pub fn clr(_op: u16, state: &mut State) -> Result<()> {
    state.frame.clear();
    Ok(())
}

/// PC = STACK.pop()
pub fn rts(_op: u16, state: &mut State) -> Result<()> {
    let pc = current_pc(state);
    state.pc = state.pop().ok_or(Chip8Error::StackUnderflow { pc })?;
    Ok(())
}

/// PC = addr
pub fn jump(op: u16, state: &mut State) -> Result<()> {
    state.pc = op.addr();
    Ok(())
}

/// STACK.push(PC); PC = addr
pub fn call(op: u16, state: &mut State) -> Result<()> {
    if !state.push(state.pc) {
        return Err(Chip8Error::StackOverflow {
            pc: current_pc(state),
        });
    }
    state.pc = op.addr();
    Ok(())
}

/// if Vx == kk then pc += 2
pub fn ske(op: u16, state: &mut State) -> Result<()> {
    let skip = state.v[op.x()] == op.kk();
    skip_if(state, skip);
    Ok(())
}

/// if Vx != kk then pc += 2
pub fn skne(op: u16, state: &mut State) -> Result<()> {
    let skip = state.v[op.x()] != op.kk();
    skip_if(state, skip);
    Ok(())
}

/// if Vx == Vy then pc += 2
pub fn skre(op: u16, state: &mut State) -> Result<()> {
    let skip = state.v[op.x()] == state.v[op.y()];
    skip_if(state, skip);
    Ok(())
}

/// Vx = kk
pub fn load(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = op.kk();
    Ok(())
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it
pub fn add(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.v[op.x()].wrapping_add(op.kk());
    Ok(())
}

/// Vx = Vy
pub fn mv(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.v[op.y()];
    Ok(())
}

/// Vx |= Vy; VF = 0
pub fn or(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] |= state.v[op.y()];
    state.v[0xF] = 0x0;
    Ok(())
}

/// Vx &= Vy; VF = 0
pub fn and(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] &= state.v[op.y()];
    state.v[0xF] = 0x0;
    Ok(())
}

/// Vx ^= Vy; VF = 0
pub fn xor(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] ^= state.v[op.y()];
    state.v[0xF] = 0x0;
    Ok(())
}

/// Vx += Vy; VF = overflow
pub fn addr(op: u16, state: &mut State) -> Result<()> {
    let (res, over) = state.v[op.x()].overflowing_add(state.v[op.y()]);
    state.v[op.x()] = res;
    state.v[0xF] = over as u8;
    Ok(())
}

/// VF = Vx > Vy; Vx -= Vy
pub fn sub(op: u16, state: &mut State) -> Result<()> {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    state.v[0xF] = (vx > vy) as u8;
    state.v[op.x()] = vx.wrapping_sub(vy);
    Ok(())
}

/// VF = lsb(Vx); Vx >>= 1
pub fn shr(op: u16, state: &mut State) -> Result<()> {
    let vx = state.v[op.x()];
    state.v[0xF] = vx & 0x1;
    state.v[op.x()] = vx >> 1;
    Ok(())
}

/// VF = Vy > Vx; Vx = Vy - Vx
pub fn subn(op: u16, state: &mut State) -> Result<()> {
    let (vx, vy) = (state.v[op.x()], state.v[op.y()]);
    state.v[0xF] = (vy > vx) as u8;
    state.v[op.x()] = vy.wrapping_sub(vx);
    Ok(())
}

/// VF = msb(Vx); Vx <<= 1
pub fn shl(op: u16, state: &mut State) -> Result<()> {
    let vx = state.v[op.x()];
    state.v[0xF] = vx >> 7;
    state.v[op.x()] = vx << 1;
    Ok(())
}

/// if Vx != Vy then pc += 2
pub fn skrne(op: u16, state: &mut State) -> Result<()> {
    let skip = state.v[op.x()] != state.v[op.y()];
    skip_if(state, skip);
    Ok(())
}

/// I = addr
pub fn loadi(op: u16, state: &mut State) -> Result<()> {
    state.i = op.addr();
    Ok(())
}

/// PC = V0 + addr
/// Always offsets by V0, whatever x is.
pub fn jumpi(op: u16, state: &mut State) -> Result<()> {
    state.pc = u16::from(state.v[0x0]) + op.addr();
    Ok(())
}

/// Vx = rand_byte & kk
pub fn rand(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.random_byte() & op.kk();
    Ok(())
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n onto the frame at position x, y.
/// The position wraps but the sprite itself is clipped at the edges.
/// Sets VF if any pixels were erased
pub fn draw(op: u16, state: &mut State) -> Result<()> {
    let x = state.v[op.x()] as usize % DISPLAY_WIDTH;
    let y = state.v[op.y()] as usize % DISPLAY_HEIGHT;
    let n = op.n() as usize;

    let mut sprite = [0; 15];
    sprite[..n].copy_from_slice(state.read(state.i, n)?);

    let mut collision = false;
    for (offset, bits) in sprite[..n].iter().enumerate() {
        let row = y + offset;
        if row >= DISPLAY_HEIGHT {
            break;
        }
        collision |= state.frame.xor_sprite(row, *bits, x);
    }
    state.v[0xF] = collision as u8;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(op: u16, state: &mut State) -> Result<()> {
    let key = state.v[op.x()];
    if key >= KEY_COUNT {
        return Err(invalid(op, state));
    }
    let skip = state.keypad.is_pressed(key);
    skip_if(state, skip);
    Ok(())
}

/// if !Vx.pressed then pc += 2
pub fn skup(op: u16, state: &mut State) -> Result<()> {
    let key = state.v[op.x()];
    if key >= KEY_COUNT {
        return Err(invalid(op, state));
    }
    let skip = !state.keypad.is_pressed(key);
    skip_if(state, skip);
    Ok(())
}

/// Vx = DT
pub fn moved(op: u16, state: &mut State) -> Result<()> {
    state.v[op.x()] = state.timers.delay();
    Ok(())
}

/// await keypress for Vx
/// Rewinds pc so this instruction runs again until some key is held.
pub fn keyd(op: u16, state: &mut State) -> Result<()> {
    match state.keypad.first_pressed() {
        Some(key) => state.v[op.x()] = key,
        None => {
            trace!("waiting for a key press into V{:X}", op.x());
            state.pc = state.pc.wrapping_sub(0x2);
        }
    }
    Ok(())
}

/// DT = Vx
pub fn loads(op: u16, state: &mut State) -> Result<()> {
    state.timers.set_delay(state.v[op.x()]);
    Ok(())
}

/// ST = Vx
pub fn ld(op: u16, state: &mut State) -> Result<()> {
    if let Some(tone) = state.timers.set_sound(state.v[op.x()]) {
        state.pending_tone = Some(tone);
    }
    Ok(())
}

/// I += Vx; VF = 1 if I passes 0xFFF
/// I saturates instead of wrapping back into low memory.
pub fn addi(op: u16, state: &mut State) -> Result<()> {
    let sum = state.i.saturating_add(u16::from(state.v[op.x()]));
    if sum > 0x0FFF {
        state.v[0xF] = 0x1;
    }
    state.i = sum;
    Ok(())
}

/// I = FONT + (Vx & 0xF) * 5
/// Set I to the memory address of the font glyph for the low nibble of Vx
pub fn ldspr(op: u16, state: &mut State) -> Result<()> {
    state.i = FONT_START + u16::from(state.v[op.x()] & 0xF) * FONT_GLYPH_SIZE;
    Ok(())
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(op: u16, state: &mut State) -> Result<()> {
    let vx = state.v[op.x()];
    state.write(state.i, &[vx / 100, vx / 10 % 10, vx % 10])
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(op: u16, state: &mut State) -> Result<()> {
    let v = state.v;
    state.write(state.i, &v[..=op.x()])
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(op: u16, state: &mut State) -> Result<()> {
    let x = op.x();
    let mut v = state.v;
    v[..=x].copy_from_slice(state.read(state.i, x + 1)?);
    state.v = v;
    Ok(())
}
