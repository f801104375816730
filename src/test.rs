use gbcore_common::error::Error;

use crate::{
    devices::buffer::BufferDevice,
    gb::{GameBoy, GameBoyMode},
    ppu::FRAME_BUFFER_SIZE,
};

#[derive(Default)]
pub struct TestOptions {
    pub mode: Option<GameBoyMode>,
    pub ppu_enabled: Option<bool>,
    pub apu_enabled: Option<bool>,
    pub dma_enabled: Option<bool>,
    pub timer_enabled: Option<bool>,
}

pub fn build_test(options: TestOptions) -> Box<GameBoy> {
    let device = Box::<BufferDevice>::default();
    let mut game_boy = Box::new(GameBoy::new(options.mode));
    game_boy.set_ppu_enabled(options.ppu_enabled.unwrap_or(true));
    game_boy.set_apu_enabled(options.apu_enabled.unwrap_or(true));
    game_boy.set_dma_enabled(options.dma_enabled.unwrap_or(true));
    game_boy.set_timer_enabled(options.timer_enabled.unwrap_or(true));
    game_boy.attach_serial(device);
    game_boy.load().unwrap();
    game_boy
}

pub fn run_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<Box<GameBoy>, Error> {
    let max_cycles = max_cycles.unwrap_or(u64::MAX);
    let mut game_boy = build_test(options);
    game_boy.load_rom_file(rom_path, None)?;
    game_boy.clocks_cycles(max_cycles as usize);
    Ok(game_boy)
}

pub fn run_step_test(
    rom_path: &str,
    addr: u16,
    options: TestOptions,
) -> Result<Box<GameBoy>, Error> {
    let mut game_boy = build_test(options);
    game_boy.load_rom_file(rom_path, None)?;
    game_boy.step_to(addr);
    Ok(game_boy)
}

pub fn run_serial_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<(String, Box<GameBoy>), Error> {
    let mut game_boy = run_test(rom_path, max_cycles, options)?;
    Ok((game_boy.serial().device().state(), game_boy))
}

pub fn run_image_test(
    rom_path: &str,
    max_cycles: Option<u64>,
    options: TestOptions,
) -> Result<([u8; FRAME_BUFFER_SIZE], Box<GameBoy>), Error> {
    let mut game_boy = run_test(rom_path, max_cycles, options)?;
    Ok((*game_boy.frame_buffer(), game_boy))
}

#[cfg(test)]
mod tests {
    use crate::consts::{
        BGP_ADDR, IF_ADDR, LCDC_ADDR, LYC_ADDR, SCX_ADDR, SCY_ADDR, TAC_ADDR, WX_ADDR, WY_ADDR,
    };

    use super::{build_test, TestOptions};

    #[test]
    fn test_boot_state() {
        let mut game_boy = build_test(TestOptions::default());
        game_boy.load_rom_empty().unwrap();
        game_boy.boot();

        assert_eq!(game_boy.cpu_i().pc(), 0x0100);
        assert_eq!(game_boy.cpu_i().sp(), 0xfffe);
        assert_eq!(game_boy.cpu_i().af(), 0x01b0);
        assert_eq!(game_boy.cpu_i().bc(), 0x0013);
        assert_eq!(game_boy.cpu_i().de(), 0x00d8);
        assert_eq!(game_boy.cpu_i().hl(), 0x014d);
        assert!(!game_boy.cpu_i().ime());

        assert_eq!(game_boy.mmu().read(TAC_ADDR), 0xf8);
        assert_eq!(game_boy.mmu().read(IF_ADDR), 0xe1);

        assert_eq!(game_boy.ppu().read(LCDC_ADDR), 0x91);
        assert_eq!(game_boy.ppu().read(SCY_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(SCX_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(LYC_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(BGP_ADDR), 0xfc);
        assert_eq!(game_boy.ppu().read(WX_ADDR), 0x00);
        assert_eq!(game_boy.ppu().read(WY_ADDR), 0x00);
    }

    #[test]
    fn test_build_test_runs_nops() {
        let mut rom = vec![0u8; 32 * 1024];
        rom[0x0100] = 0x00;
        rom[0x0101] = 0x00;
        rom[0x0102] = 0x00;
        rom[0x0103] = 0x00;

        let mut game_boy = build_test(TestOptions::default());
        game_boy.load_rom(&rom, None).unwrap();
        game_boy.boot();

        for _ in 0..4 {
            game_boy.clock();
        }

        assert_eq!(game_boy.cpu_i().pc(), 0x0104);
    }
}
